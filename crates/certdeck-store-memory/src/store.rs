//! [`MemoryStore`]: the in-memory implementation of [`CertificationStore`].

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;

use certdeck_core::{
  Error, Result,
  catalog::Catalog,
  platform::Platform,
  query::RecordQuery,
  record::{CertificationRecord, NewRecord, RecordPatch},
  store::{CertificationStore, PlatformCount},
};

use crate::ids::next_id;

type Clock = Arc<dyn Fn() -> i64 + Send + Sync>;

// ─── Store ───────────────────────────────────────────────────────────────────

/// A certification store held entirely in process memory.
///
/// Cloning is cheap; clones share the same catalog.
#[derive(Clone)]
pub struct MemoryStore {
  catalog: Arc<RwLock<Catalog>>,
  /// Source of the millisecond timestamp used in new ids.
  clock:   Clock,
}

impl Default for MemoryStore {
  fn default() -> Self { Self::new() }
}

impl MemoryStore {
  /// An empty store: every platform present, no records.
  pub fn new() -> Self { Self::with_catalog(Catalog::default()) }

  /// A store preloaded with `catalog`.
  ///
  /// The catalog is trusted as-is; use [`CertificationStore::import_all`] for
  /// untrusted input.
  pub fn with_catalog(catalog: Catalog) -> Self {
    Self {
      catalog: Arc::new(RwLock::new(catalog)),
      clock:   Arc::new(|| Utc::now().timestamp_millis()),
    }
  }

  /// Replace the id clock. Tests use a fixed one.
  pub fn with_clock(mut self, clock: impl Fn() -> i64 + Send + Sync + 'static) -> Self {
    self.clock = Arc::new(clock);
    self
  }
}

fn position(records: &[CertificationRecord], id: &str) -> Option<usize> {
  records.iter().position(|r| r.id == id)
}

// ─── CertificationStore impl ─────────────────────────────────────────────────

impl CertificationStore for MemoryStore {
  type Error = Error;

  // ── Writes ────────────────────────────────────────────────────────────────

  async fn add(&self, platform: Platform, input: NewRecord) -> Result<CertificationRecord> {
    let millis = (self.clock)();

    let mut catalog = self.catalog.write().await;
    let records = catalog.records_mut(platform);
    let record = input.into_record(next_id(platform, millis, records), platform);
    records.push(record.clone());

    tracing::info!(%platform, id = %record.id, "record added");
    Ok(record)
  }

  async fn update(
    &self,
    platform: Platform,
    id:       String,
    patch:    RecordPatch,
  ) -> Result<CertificationRecord> {
    let mut catalog = self.catalog.write().await;
    let record = catalog
      .records_mut(platform)
      .iter_mut()
      .find(|r| r.id == id)
      .ok_or_else(|| Error::not_found(platform, &id))?;

    patch.apply_to(record, platform);
    Ok(record.clone())
  }

  async fn remove(&self, platform: Platform, id: String) -> Result<()> {
    let mut catalog = self.catalog.write().await;
    let records = catalog.records_mut(platform);
    let index = position(records, &id).ok_or_else(|| Error::not_found(platform, &id))?;
    records.remove(index);

    tracing::info!(%platform, %id, "record removed");
    Ok(())
  }

  async fn reorder(&self, platform: Platform, id: String, before_id: String) -> Result<()> {
    let mut catalog = self.catalog.write().await;
    let records = catalog.records_mut(platform);

    let from = position(records, &id).ok_or_else(|| Error::not_found(platform, &id))?;
    if position(records, &before_id).is_none() {
      return Err(Error::not_found(platform, before_id));
    }
    if id == before_id {
      return Ok(());
    }

    let moved = records.remove(from);
    // The target shifts left by one when the moved record came before it.
    let to = position(records, &before_id).ok_or_else(|| Error::not_found(platform, &before_id))?;
    records.insert(to, moved);
    Ok(())
  }

  async fn import_all(&self, mut catalog: Catalog) -> Result<()> {
    // Validate before taking the lock so a bad catalog never touches state.
    catalog.normalize();
    catalog.validate()?;

    let total = catalog.len();
    *self.catalog.write().await = catalog;

    tracing::info!(records = total, "catalog replaced by import");
    Ok(())
  }

  // ── Reads ─────────────────────────────────────────────────────────────────

  async fn get(&self, platform: Platform, id: String) -> Result<Option<CertificationRecord>> {
    let catalog = self.catalog.read().await;
    Ok(catalog.records(platform).iter().find(|r| r.id == id).cloned())
  }

  async fn query(&self, query: &RecordQuery) -> Result<Vec<CertificationRecord>> {
    let catalog = self.catalog.read().await;
    let out = query.apply(catalog.records(query.platform));

    tracing::debug!(
      platform = %query.platform,
      text = ?query.text,
      status = %query.status,
      sort = %query.sort,
      hits = out.len(),
      "query"
    );
    Ok(out)
  }

  async fn summary(&self) -> Result<Vec<PlatformCount>> {
    let catalog = self.catalog.read().await;
    Ok(
      catalog
        .iter()
        .map(|(platform, records)| PlatformCount { platform, count: records.len() })
        .collect(),
    )
  }

  async fn export_all(&self) -> Result<Catalog> { Ok(self.catalog.read().await.clone()) }
}
