//! Certification records: the unit of the store.
//!
//! A record lives in exactly one platform's ordered sequence. Its `id` is
//! assigned by the store and never changes; every other field may be replaced
//! by a [`RecordPatch`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::{Error, Result, platform::Platform};

// ─── Status ──────────────────────────────────────────────────────────────────

/// Where a certification stands. `Expired` is never assigned automatically;
/// it is set by the user like any other status.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
  Display,
  EnumString,
  EnumIter,
)]
pub enum Status {
  Active,
  #[serde(rename = "In Progress")]
  #[strum(serialize = "In Progress")]
  InProgress,
  Expired,
}

// ─── Record ──────────────────────────────────────────────────────────────────

/// A single certification or course card.
///
/// Field order here is the field order of exported JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificationRecord {
  pub id:            String,
  pub title:         String,
  pub description:   String,
  pub url:           String,
  pub date:          NaiveDate,
  pub status:        Status,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub badge_url:     Option<String>,
  /// Embeddable HTML card; only kept for [`Platform::Roadmapsh`].
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub card_html:     Option<String>,
  /// Embeddable Markdown card; only kept for [`Platform::Roadmapsh`].
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub card_markdown: Option<String>,
}

impl CertificationRecord {
  /// Enforce the storage invariants for a record filed under `platform`:
  /// blank optional strings become `None`, and embed snippets are dropped
  /// on platforms that don't support them.
  pub fn normalize(&mut self, platform: Platform) {
    self.badge_url = non_blank(self.badge_url.take());
    if platform.supports_card_embeds() {
      self.card_html = non_blank(self.card_html.take());
      self.card_markdown = non_blank(self.card_markdown.take());
    } else {
      self.card_html = None;
      self.card_markdown = None;
    }
  }

  /// Case-insensitive substring match over title and description.
  /// `needle` must already be lowercased.
  pub fn matches_text(&self, needle: &str) -> bool {
    needle.is_empty()
      || self.title.to_lowercase().contains(needle)
      || self.description.to_lowercase().contains(needle)
  }
}

fn non_blank(value: Option<String>) -> Option<String> {
  value.filter(|s| !s.trim().is_empty())
}

fn require(field: &str, value: &str) -> Result<()> {
  if value.trim().is_empty() {
    return Err(Error::Validation(format!("{field} is required")));
  }
  Ok(())
}

// ─── NewRecord ───────────────────────────────────────────────────────────────

/// Input to [`crate::store::CertificationStore::add`].
/// `id` is always assigned by the store; it is not accepted from callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRecord {
  pub title:         String,
  pub description:   String,
  pub url:           String,
  pub date:          NaiveDate,
  pub status:        Status,
  #[serde(default)]
  pub badge_url:     Option<String>,
  #[serde(default)]
  pub card_html:     Option<String>,
  #[serde(default)]
  pub card_markdown: Option<String>,
}

impl NewRecord {
  /// Convenience constructor with all optional fields unset.
  pub fn new(
    title: impl Into<String>,
    description: impl Into<String>,
    url: impl Into<String>,
    date: NaiveDate,
    status: Status,
  ) -> Self {
    Self {
      title: title.into(),
      description: description.into(),
      url: url.into(),
      date,
      status,
      badge_url: None,
      card_html: None,
      card_markdown: None,
    }
  }

  /// Check the fields a card form marks as required. The store does not call
  /// this; callers validate before adding.
  pub fn validate(&self) -> Result<()> {
    require("title", &self.title)?;
    require("description", &self.description)?;
    require("url", &self.url)
  }

  /// Attach an id and normalise for `platform`.
  pub fn into_record(self, id: String, platform: Platform) -> CertificationRecord {
    let mut record = CertificationRecord {
      id,
      title: self.title,
      description: self.description,
      url: self.url,
      date: self.date,
      status: self.status,
      badge_url: self.badge_url,
      card_html: self.card_html,
      card_markdown: self.card_markdown,
    };
    record.normalize(platform);
    record
  }
}

// ─── RecordPatch ─────────────────────────────────────────────────────────────

/// A shallow partial update. Present fields replace the stored value; absent
/// fields are left alone. An empty optional string clears that field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordPatch {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub title:         Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description:   Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub url:           Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub date:          Option<NaiveDate>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub status:        Option<Status>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub badge_url:     Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub card_html:     Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub card_markdown: Option<String>,
}

impl RecordPatch {
  /// Required fields may be omitted from a patch but not blanked by it.
  pub fn validate(&self) -> Result<()> {
    if let Some(title) = &self.title {
      require("title", title)?;
    }
    if let Some(description) = &self.description {
      require("description", description)?;
    }
    if let Some(url) = &self.url {
      require("url", url)?;
    }
    Ok(())
  }

  pub fn is_empty(&self) -> bool { *self == Self::default() }

  /// Merge this patch over `record`, then re-normalise for `platform`.
  pub fn apply_to(self, record: &mut CertificationRecord, platform: Platform) {
    if let Some(v) = self.title {
      record.title = v;
    }
    if let Some(v) = self.description {
      record.description = v;
    }
    if let Some(v) = self.url {
      record.url = v;
    }
    if let Some(v) = self.date {
      record.date = v;
    }
    if let Some(v) = self.status {
      record.status = v;
    }
    if self.badge_url.is_some() {
      record.badge_url = self.badge_url;
    }
    if self.card_html.is_some() {
      record.card_html = self.card_html;
    }
    if self.card_markdown.is_some() {
      record.card_markdown = self.card_markdown;
    }
    record.normalize(platform);
  }
}

#[cfg(test)]
mod tests {
  use std::str::FromStr;

  use super::*;

  fn date(s: &str) -> NaiveDate { NaiveDate::from_str(s).unwrap() }

  fn azure() -> NewRecord {
    NewRecord::new(
      "Azure Fundamentals",
      "Cloud concepts, services and solutions",
      "https://learn.microsoft.com/certifications/azure-fundamentals",
      date("2024-01-15"),
      Status::Active,
    )
  }

  #[test]
  fn status_uses_display_labels() {
    assert_eq!(serde_json::to_string(&Status::InProgress).unwrap(), "\"In Progress\"");
    assert_eq!(Status::from_str("In Progress").unwrap(), Status::InProgress);
    assert_eq!(Status::Expired.to_string(), "Expired");
    assert!(serde_json::from_str::<Status>("\"Lapsed\"").is_err());
  }

  #[test]
  fn validate_rejects_blank_required_fields() {
    assert!(azure().validate().is_ok());

    let mut input = azure();
    input.title = "   ".into();
    let err = input.validate().unwrap_err();
    assert!(matches!(err, Error::Validation(ref m) if m.contains("title")), "{err}");

    let mut input = azure();
    input.url = String::new();
    assert!(matches!(input.validate(), Err(Error::Validation(_))));
  }

  #[test]
  fn embeds_are_dropped_off_roadmap() {
    let mut input = azure();
    input.card_html = Some("<a></a>".into());
    input.card_markdown = Some("[x](y)".into());

    let kept = input.clone().into_record("r-1".into(), Platform::Roadmapsh);
    assert_eq!(kept.card_html.as_deref(), Some("<a></a>"));
    assert_eq!(kept.card_markdown.as_deref(), Some("[x](y)"));

    let dropped = input.into_record("m-1".into(), Platform::MicrosoftLearn);
    assert_eq!(dropped.card_html, None);
    assert_eq!(dropped.card_markdown, None);
  }

  #[test]
  fn blank_badge_becomes_none() {
    let mut input = azure();
    input.badge_url = Some(String::new());
    let record = input.into_record("m-1".into(), Platform::MicrosoftLearn);
    assert_eq!(record.badge_url, None);
  }

  #[test]
  fn patch_merges_present_fields_only() {
    let mut record = azure().into_record("m-1".into(), Platform::MicrosoftLearn);
    record.badge_url = Some("https://example.com/badge.svg".into());

    let patch = RecordPatch {
      status: Some(Status::Expired),
      description: Some("Retired exam".into()),
      ..Default::default()
    };
    patch.apply_to(&mut record, Platform::MicrosoftLearn);

    assert_eq!(record.id, "m-1");
    assert_eq!(record.title, "Azure Fundamentals");
    assert_eq!(record.description, "Retired exam");
    assert_eq!(record.status, Status::Expired);
    assert_eq!(record.badge_url.as_deref(), Some("https://example.com/badge.svg"));
  }

  #[test]
  fn patch_with_empty_badge_clears_it() {
    let mut record = azure().into_record("m-1".into(), Platform::MicrosoftLearn);
    record.badge_url = Some("https://example.com/badge.svg".into());

    RecordPatch { badge_url: Some(String::new()), ..Default::default() }
      .apply_to(&mut record, Platform::MicrosoftLearn);
    assert_eq!(record.badge_url, None);
  }

  #[test]
  fn patch_cannot_blank_title() {
    let patch = RecordPatch { title: Some(" ".into()), ..Default::default() };
    assert!(matches!(patch.validate(), Err(Error::Validation(_))));
    assert!(RecordPatch::default().validate().is_ok());
    assert!(RecordPatch::default().is_empty());
  }

  #[test]
  fn exported_field_order_is_stable() {
    let mut record = azure().into_record("m-1".into(), Platform::MicrosoftLearn);
    record.badge_url = Some("b".into());
    let json = serde_json::to_string(&record).unwrap();
    let keys = ["\"id\"", "\"title\"", "\"description\"", "\"url\"", "\"date\"", "\"status\"", "\"badge_url\""];
    let positions: Vec<usize> = keys.iter().map(|k| json.find(k).unwrap()).collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "{json}");
    assert!(!json.contains("card_html"));
    assert!(json.contains("\"date\":\"2024-01-15\""));
  }
}
