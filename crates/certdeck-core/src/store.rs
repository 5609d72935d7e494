//! The `CertificationStore` trait.
//!
//! The trait is implemented by storage backends (e.g.
//! `certdeck-store-memory`). Higher layers (`certdeck-api`, the server) depend
//! on this abstraction, not on any concrete backend.

use std::future::Future;

use crate::{
  catalog::Catalog,
  platform::Platform,
  query::RecordQuery,
  record::{CertificationRecord, NewRecord, RecordPatch},
};

/// Number of records filed under a platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct PlatformCount {
  pub platform: Platform,
  pub count:    usize,
}

/// Abstraction over a certification store backend.
///
/// Every operation is atomic with respect to every other: a failed call
/// leaves the store exactly as it was.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait CertificationStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Writes ────────────────────────────────────────────────────────────

  /// Append a record to `platform`'s sequence under a freshly assigned id.
  ///
  /// Does not validate required fields; see [`NewRecord::validate`].
  fn add(
    &self,
    platform: Platform,
    input: NewRecord,
  ) -> impl Future<Output = Result<CertificationRecord, Self::Error>> + Send + '_;

  /// Shallow-merge `patch` over the record `id`. Fails if `id` is absent.
  fn update(
    &self,
    platform: Platform,
    id: String,
    patch: RecordPatch,
  ) -> impl Future<Output = Result<CertificationRecord, Self::Error>> + Send + '_;

  /// Delete the record `id`. Fails if `id` is absent.
  fn remove(
    &self,
    platform: Platform,
    id: String,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Move `id` to sit immediately before `before_id`.
  ///
  /// A no-op when the ids are equal; fails if either is absent.
  fn reorder(
    &self,
    platform: Platform,
    id: String,
    before_id: String,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Replace the whole store with `catalog`. Nothing changes on failure.
  fn import_all(
    &self,
    catalog: Catalog,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  // ── Reads ─────────────────────────────────────────────────────────────

  /// Retrieve one record. Returns `None` if not found.
  fn get(
    &self,
    platform: Platform,
    id: String,
  ) -> impl Future<Output = Result<Option<CertificationRecord>, Self::Error>> + Send + '_;

  /// Filter and sort one platform's records into a fresh list.
  fn query<'a>(
    &'a self,
    query: &'a RecordQuery,
  ) -> impl Future<Output = Result<Vec<CertificationRecord>, Self::Error>> + Send + 'a;

  /// Record counts for every platform, in declaration order.
  fn summary(
    &self,
  ) -> impl Future<Output = Result<Vec<PlatformCount>, Self::Error>> + Send + '_;

  /// A full snapshot of every platform's sequence.
  fn export_all(&self) -> impl Future<Output = Result<Catalog, Self::Error>> + Send + '_;
}
