//! Read-side query parameters and the filter/sort pipeline behind
//! [`crate::store::CertificationStore::query`].

use std::{cmp::Ordering, fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::{
  platform::Platform,
  record::{CertificationRecord, Status},
};

// ─── Sort key ────────────────────────────────────────────────────────────────

/// Display ordering for a query result. Every key sorts stably, so records
/// that compare equal keep their sequence (drag) order.
#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
  Display,
  EnumString,
  EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum SortKey {
  /// Sequence order as left by adds and reorders.
  #[default]
  Manual,
  DateDesc,
  DateAsc,
  TitleAsc,
  TitleDesc,
}

impl SortKey {
  fn compare(self, a: &CertificationRecord, b: &CertificationRecord) -> Ordering {
    match self {
      Self::Manual => Ordering::Equal,
      Self::DateDesc => b.date.cmp(&a.date),
      Self::DateAsc => a.date.cmp(&b.date),
      Self::TitleAsc => compare_titles(&a.title, &b.title),
      Self::TitleDesc => compare_titles(&b.title, &a.title),
    }
  }
}

/// Case-folded comparison first so "azure" and "Azure" sort together; the
/// raw comparison only separates titles that differ in case alone.
fn compare_titles(a: &str, b: &str) -> Ordering {
  a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b))
}

// ─── Status filter ───────────────────────────────────────────────────────────

/// `all`, or an exact status match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
  #[default]
  All,
  Only(Status),
}

impl StatusFilter {
  pub fn admits(self, status: Status) -> bool {
    match self {
      Self::All => true,
      Self::Only(wanted) => wanted == status,
    }
  }
}

impl FromStr for StatusFilter {
  type Err = strum::ParseError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    if s.eq_ignore_ascii_case("all") {
      return Ok(Self::All);
    }
    Status::from_str(s).map(Self::Only)
  }
}

impl fmt::Display for StatusFilter {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::All => f.write_str("all"),
      Self::Only(status) => write!(f, "{status}"),
    }
  }
}

impl From<Status> for StatusFilter {
  fn from(status: Status) -> Self { Self::Only(status) }
}

// ─── Query ───────────────────────────────────────────────────────────────────

/// Parameters for [`crate::store::CertificationStore::query`].
#[derive(Debug, Clone)]
pub struct RecordQuery {
  pub platform: Platform,
  /// Free-text filter over title and description; blank matches everything.
  pub text:     Option<String>,
  pub status:   StatusFilter,
  pub sort:     SortKey,
}

impl RecordQuery {
  /// Everything on `platform`, in sequence order.
  pub fn new(platform: Platform) -> Self {
    Self {
      platform,
      text: None,
      status: StatusFilter::All,
      sort: SortKey::Manual,
    }
  }

  pub fn text(mut self, text: impl Into<String>) -> Self {
    self.text = Some(text.into());
    self
  }

  pub fn status(mut self, status: impl Into<StatusFilter>) -> Self {
    self.status = status.into();
    self
  }

  pub fn sort(mut self, sort: SortKey) -> Self {
    self.sort = sort;
    self
  }

  /// Filter and sort `records` (one platform's sequence) into a fresh list.
  pub fn apply(&self, records: &[CertificationRecord]) -> Vec<CertificationRecord> {
    let needle = self
      .text
      .as_deref()
      .map(str::to_lowercase)
      .unwrap_or_default();

    let mut out: Vec<CertificationRecord> = records
      .iter()
      .filter(|r| self.status.admits(r.status) && r.matches_text(&needle))
      .cloned()
      .collect();

    // `sort_by` is stable; ties keep sequence order.
    if self.sort != SortKey::Manual {
      out.sort_by(|a, b| self.sort.compare(a, b));
    }
    out
  }
}
