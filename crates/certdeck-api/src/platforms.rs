//! Handler for `GET /platforms`.
//!
//! Returns display metadata for every platform together with its record
//! count, in tab order.

use std::sync::Arc;

use axum::{Json, extract::State};
use certdeck_core::{platform::PlatformInfo, store::CertificationStore};
use serde::Serialize;

use crate::error::ApiError;

#[derive(Debug, Serialize)]
pub struct PlatformEntry {
  #[serde(flatten)]
  pub info:  PlatformInfo,
  pub count: usize,
}

/// `GET /platforms`
pub async fn list<S>(State(store): State<Arc<S>>) -> Result<Json<Vec<PlatformEntry>>, ApiError>
where
  S: CertificationStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let counts = store.summary().await.map_err(ApiError::store)?;
  let entries = counts
    .into_iter()
    .map(|c| PlatformEntry { info: c.platform.info(), count: c.count })
    .collect();
  Ok(Json(entries))
}
