//! Handler for `GET /platforms/{platform}/generate`.

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
};
use certdeck_core::{query::RecordQuery, store::CertificationStore};
use certdeck_render::Snippet;

use crate::{error::ApiError, parse_platform};

/// `GET /platforms/:p/generate`: `{"html": "...", "css": "..."}` for the
/// platform's records in sequence order.
///
/// An empty platform is rejected with 422; there is nothing to embed.
pub async fn handler<S>(
  State(store): State<Arc<S>>,
  Path(platform): Path<String>,
) -> Result<Json<Snippet>, ApiError>
where
  S: CertificationStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let platform = parse_platform(&platform)?;
  let query = RecordQuery::new(platform);
  let records = store.query(&query).await.map_err(ApiError::store)?;

  if records.is_empty() {
    return Err(ApiError::Unprocessable(format!(
      "{platform} has no certifications to generate code for"
    )));
  }

  Ok(Json(certdeck_render::generate(platform, &records)))
}
