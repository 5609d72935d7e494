//! ETag computation for exported catalogs.
//!
//! The tag is the SHA-256 of the exact response body, so two exports of an
//! unchanged store carry the same tag.

use sha2::{Digest, Sha256};

/// A quoted strong ETag for `body`.
pub fn compute_etag(body: &[u8]) -> String {
  let hash = Sha256::digest(body);
  format!("\"{}\"", hex::encode(hash))
}

/// Whether an `If-None-Match` header value names `etag`.
pub fn matches_if_none_match(header: &str, etag: &str) -> bool {
  header.trim() == "*" || header.split(',').any(|candidate| candidate.trim() == etag)
}
