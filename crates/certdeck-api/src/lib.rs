//! JSON REST API for certdeck.
//!
//! Exposes an axum [`Router`] backed by any
//! [`certdeck_core::store::CertificationStore`]. Transport concerns (binding,
//! tracing layers, TLS) are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", certdeck_api::api_router(store.clone()))
//! ```

pub mod error;
pub mod etag;
pub mod extract;
pub mod generate;
pub mod platforms;
pub mod records;
pub mod transfer;

use std::{str::FromStr, sync::Arc};

use axum::{
  Router,
  routing::{get, post},
};
use certdeck_core::{platform::Platform, store::CertificationStore};

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: CertificationStore + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Router::new()
    .route("/platforms", get(platforms::list::<S>))
    // Records
    .route(
      "/platforms/{platform}/records",
      get(records::list::<S>).post(records::create::<S>),
    )
    .route(
      "/platforms/{platform}/records/{id}",
      get(records::get_one::<S>)
        .patch(records::update_one::<S>)
        .delete(records::delete_one::<S>),
    )
    .route("/platforms/{platform}/records/{id}/move", post(records::move_one::<S>))
    // Snippet generation
    .route("/platforms/{platform}/generate", get(generate::handler::<S>))
    // Whole-catalog transfer
    .route("/export", get(transfer::export::<S>))
    .route("/import", post(transfer::import::<S>))
    .with_state(store)
}

/// Parse a platform path segment, reporting unknown keys as 400.
pub(crate) fn parse_platform(raw: &str) -> Result<Platform, ApiError> {
  Platform::from_str(raw).map_err(|_| ApiError::BadRequest(format!("unknown platform {raw:?}")))
}

#[cfg(test)]
mod tests;
