//! Whole-catalog export and import.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/export` | Pretty JSON download; `ETag`, honours `If-None-Match` |
//! | `POST` | `/import` | Raw JSON body; wholesale replace; 204 |

use std::sync::Arc;

use axum::{
  extract::State,
  http::{HeaderMap, HeaderValue, StatusCode, header},
  response::{IntoResponse, Response},
};
use bytes::Bytes;
use certdeck_core::{catalog::Catalog, store::CertificationStore};
use chrono::Utc;

use crate::{
  error::ApiError,
  etag::{compute_etag, matches_if_none_match},
};

// ─── Export ───────────────────────────────────────────────────────────────────

/// `GET /export`: the full catalog as an attachment named
/// `certifications-<YYYY-MM-DD>.json`.
pub async fn export<S>(
  State(store): State<Arc<S>>,
  headers: HeaderMap,
) -> Result<Response, ApiError>
where
  S: CertificationStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let catalog = store.export_all().await.map_err(ApiError::store)?;
  let body = catalog.to_json_pretty()?;
  let etag = compute_etag(body.as_bytes());

  let not_modified = headers
    .get(header::IF_NONE_MATCH)
    .and_then(|v| v.to_str().ok())
    .is_some_and(|v| matches_if_none_match(v, &etag));

  let etag_value = HeaderValue::from_str(&etag)
    .map_err(|e| ApiError::Store(Box::new(e)))?;

  if not_modified {
    return Ok((StatusCode::NOT_MODIFIED, [(header::ETAG, etag_value)]).into_response());
  }

  let filename = Catalog::export_filename(Utc::now().date_naive());
  let disposition = HeaderValue::from_str(&format!("attachment; filename=\"{filename}\""))
    .map_err(|e| ApiError::Store(Box::new(e)))?;

  Ok(
    (
      [
        (header::CONTENT_TYPE, HeaderValue::from_static("application/json")),
        (header::CONTENT_DISPOSITION, disposition),
        (header::ETAG, etag_value),
      ],
      body,
    )
      .into_response(),
  )
}

// ─── Import ───────────────────────────────────────────────────────────────────

/// `POST /import`: replace the whole store with the posted document.
///
/// The body is parsed and validated in full before the store is touched; any
/// problem yields 400 and leaves the store unchanged.
pub async fn import<S>(
  State(store): State<Arc<S>>,
  body: Bytes,
) -> Result<StatusCode, ApiError>
where
  S: CertificationStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let text = std::str::from_utf8(&body)
    .map_err(|e| ApiError::BadRequest(format!("import is not UTF-8: {e}")))?;

  let catalog = Catalog::from_json(text).inspect_err(|e| {
    tracing::warn!(error = %e, bytes = body.len(), "rejected import");
  })?;
  let total = catalog.len();

  store.import_all(catalog).await.map_err(ApiError::store)?;
  tracing::info!(records = total, "catalog imported");
  Ok(StatusCode::NO_CONTENT)
}
