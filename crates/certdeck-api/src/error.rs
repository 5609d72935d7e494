//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  extract::rejection::JsonRejection,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("not found: {0}")]
  NotFound(String),

  #[error("bad request: {0}")]
  BadRequest(String),

  /// Well-formed request that fails record validation.
  #[error("unprocessable: {0}")]
  Unprocessable(String),

  #[error("unsupported media type: {0}")]
  UnsupportedMediaType(String),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ApiError {
  /// Wrap an error from a store backend, recovering the HTTP meaning of any
  /// [`certdeck_core::Error`] it carries.
  pub fn store<E>(err: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    let boxed: Box<dyn std::error::Error + Send + Sync> = Box::new(err);
    match boxed.downcast::<certdeck_core::Error>() {
      Ok(core) => Self::from(*core),
      Err(other) => Self::Store(other),
    }
  }
}

impl From<certdeck_core::Error> for ApiError {
  fn from(err: certdeck_core::Error) -> Self {
    use certdeck_core::Error as E;
    match err {
      E::NotFound { .. } => Self::NotFound(err.to_string()),
      E::Parse(_) => Self::BadRequest(err.to_string()),
      E::Validation(m) => Self::Unprocessable(m),
      E::Json(_) => Self::Store(Box::new(err)),
    }
  }
}

/// Body extraction failures keep axum's status but use the JSON error shape.
impl From<JsonRejection> for ApiError {
  fn from(rejection: JsonRejection) -> Self {
    let message = rejection.body_text();
    match rejection.status() {
      StatusCode::UNPROCESSABLE_ENTITY => Self::Unprocessable(message),
      StatusCode::UNSUPPORTED_MEDIA_TYPE => Self::UnsupportedMediaType(message),
      _ => Self::BadRequest(message),
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, message) = match &self {
      ApiError::NotFound(m) => (StatusCode::NOT_FOUND, m.clone()),
      ApiError::BadRequest(m) => (StatusCode::BAD_REQUEST, m.clone()),
      ApiError::Unprocessable(m) => (StatusCode::UNPROCESSABLE_ENTITY, m.clone()),
      ApiError::UnsupportedMediaType(m) => (StatusCode::UNSUPPORTED_MEDIA_TYPE, m.clone()),
      ApiError::Store(e) => {
        tracing::error!(error = %e, "store failure");
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
      }
    };
    (status, Json(json!({ "error": message }))).into_response()
  }
}

#[cfg(test)]
mod tests {
  use certdeck_core::platform::Platform;

  use super::*;

  #[test]
  fn core_errors_keep_their_meaning_through_store() {
    let err = ApiError::store(certdeck_core::Error::not_found(Platform::Custom, "x"));
    assert!(matches!(err, ApiError::NotFound(ref m) if m.contains("\"x\"")), "{err}");

    let err = ApiError::store(certdeck_core::Error::Parse("bad".into()));
    assert!(matches!(err, ApiError::BadRequest(_)));

    let err = ApiError::store(certdeck_core::Error::Validation("title is required".into()));
    assert!(matches!(err, ApiError::Unprocessable(ref m) if m == "title is required"));
  }

  #[test]
  fn foreign_errors_are_internal() {
    let io = std::io::Error::other("disk on fire");
    let resp = ApiError::store(io).into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
  }
}
