//! Request extractors with [`ApiError`] rejections.

use axum::extract::FromRequest;

use crate::error::ApiError;

/// [`axum::Json`] whose rejection is an [`ApiError`], so malformed bodies get
/// the same `{"error": ...}` response as every other failure.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);
