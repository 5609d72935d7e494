//! Handlers for `/platforms/{platform}/records` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/platforms/:p/records` | Optional `q`, `status` (`all` or a status), `sort` |
//! | `POST`   | `/platforms/:p/records` | Body: [`NewRecord`]; returns 201 + stored record |
//! | `GET`    | `/platforms/:p/records/:id` | 404 if not found |
//! | `PATCH`  | `/platforms/:p/records/:id` | Body: [`RecordPatch`]; returns merged record |
//! | `DELETE` | `/platforms/:p/records/:id` | 204 |
//! | `POST`   | `/platforms/:p/records/:id/move` | Body: `{"before_id":"..."}`; 204 |

use std::{str::FromStr, sync::Arc};

use axum::{
  Json,
  extract::{Path, Query, State},
  http::StatusCode,
  response::IntoResponse,
};
use certdeck_core::{
  query::{RecordQuery, SortKey, StatusFilter},
  record::{CertificationRecord, NewRecord, RecordPatch},
  store::CertificationStore,
};
use serde::Deserialize;

use crate::{error::ApiError, extract::ApiJson, parse_platform};

// ─── List ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
  /// Free-text filter over title and description.
  pub q:      Option<String>,
  /// `all` (default) or an exact status label, e.g. `In Progress`.
  pub status: Option<String>,
  /// `manual` (default), `date-desc`, `date-asc`, `title-asc`, `title-desc`.
  pub sort:   Option<String>,
}

impl ListParams {
  fn into_query(self, platform: &str) -> Result<RecordQuery, ApiError> {
    let status = match self.status.as_deref() {
      None => StatusFilter::All,
      Some(s) => StatusFilter::from_str(s)
        .map_err(|_| ApiError::BadRequest(format!("unknown status filter {s:?}")))?,
    };
    let sort = match self.sort.as_deref() {
      None => SortKey::default(),
      Some(s) => SortKey::from_str(s)
        .map_err(|_| ApiError::BadRequest(format!("unknown sort key {s:?}")))?,
    };
    Ok(RecordQuery {
      platform: parse_platform(platform)?,
      text: self.q,
      status,
      sort,
    })
  }
}

/// `GET /platforms/:p/records[?q=...][&status=...][&sort=...]`
pub async fn list<S>(
  State(store): State<Arc<S>>,
  Path(platform): Path<String>,
  Query(params): Query<ListParams>,
) -> Result<Json<Vec<CertificationRecord>>, ApiError>
where
  S: CertificationStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let query = params.into_query(&platform)?;
  let records = store.query(&query).await.map_err(ApiError::store)?;
  Ok(Json(records))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /platforms/:p/records`: returns 201 + the stored record.
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Path(platform): Path<String>,
  ApiJson(body): ApiJson<NewRecord>,
) -> Result<impl IntoResponse, ApiError>
where
  S: CertificationStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let platform = parse_platform(&platform)?;
  body.validate()?;

  let record = store.add(platform, body).await.map_err(ApiError::store)?;
  tracing::info!(%platform, id = %record.id, "record created");
  Ok((StatusCode::CREATED, Json(record)))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /platforms/:p/records/:id`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path((platform, id)): Path<(String, String)>,
) -> Result<Json<CertificationRecord>, ApiError>
where
  S: CertificationStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let platform = parse_platform(&platform)?;
  let record = store
    .get(platform, id.clone())
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| ApiError::NotFound(format!("record {id:?} not found in {platform}")))?;
  Ok(Json(record))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PATCH /platforms/:p/records/:id`: shallow merge; returns the result.
pub async fn update_one<S>(
  State(store): State<Arc<S>>,
  Path((platform, id)): Path<(String, String)>,
  ApiJson(patch): ApiJson<RecordPatch>,
) -> Result<Json<CertificationRecord>, ApiError>
where
  S: CertificationStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let platform = parse_platform(&platform)?;
  patch.validate()?;

  let record = store
    .update(platform, id, patch)
    .await
    .map_err(ApiError::store)?;
  Ok(Json(record))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /platforms/:p/records/:id`
pub async fn delete_one<S>(
  State(store): State<Arc<S>>,
  Path((platform, id)): Path<(String, String)>,
) -> Result<StatusCode, ApiError>
where
  S: CertificationStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let platform = parse_platform(&platform)?;
  store
    .remove(platform, id.clone())
    .await
    .map_err(ApiError::store)?;
  tracing::info!(%platform, %id, "record deleted");
  Ok(StatusCode::NO_CONTENT)
}

// ─── Move ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct MoveBody {
  /// The record that should end up immediately after the moved one.
  pub before_id: String,
}

/// `POST /platforms/:p/records/:id/move` with body `{"before_id":"..."}`.
pub async fn move_one<S>(
  State(store): State<Arc<S>>,
  Path((platform, id)): Path<(String, String)>,
  ApiJson(body): ApiJson<MoveBody>,
) -> Result<StatusCode, ApiError>
where
  S: CertificationStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let platform = parse_platform(&platform)?;
  store
    .reorder(platform, id, body.before_id)
    .await
    .map_err(ApiError::store)?;
  Ok(StatusCode::NO_CONTENT)
}
