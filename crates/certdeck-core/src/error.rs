//! Error types for `certdeck-core`.

use thiserror::Error;

use crate::platform::Platform;

#[derive(Debug, Error)]
pub enum Error {
  #[error("record {id:?} not found in {platform}")]
  NotFound { platform: Platform, id: String },

  /// An import payload did not have the expected shape.
  #[error("malformed import: {0}")]
  Parse(String),

  /// A required field was missing or blank. Raised by the input types'
  /// `validate` methods, never by the store itself.
  #[error("invalid record: {0}")]
  Validation(String),

  #[error("serialization error: {0}")]
  Json(#[from] serde_json::Error),
}

impl Error {
  pub fn not_found(platform: Platform, id: impl Into<String>) -> Self {
    Self::NotFound { platform, id: id.into() }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
