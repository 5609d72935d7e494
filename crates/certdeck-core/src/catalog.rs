//! [`Catalog`]: a full snapshot of every platform's record sequence.
//!
//! This is the unit of export and import. Its JSON form is an object keyed by
//! platform, each value an array of records in sequence order:
//!
//! ```json
//! {
//!   "microsoft_learn": [
//!     { "id": "microsoft_learn-1705312800000", "title": "Azure Fundamentals", ... }
//!   ],
//!   "google_skills": [],
//!   ...
//! }
//! ```

use std::{
  collections::{BTreeMap, HashSet, btree_map::Entry},
  fmt,
};

use chrono::NaiveDate;
use serde::{
  Deserialize, Deserializer, Serialize,
  de::{self, MapAccess, Visitor},
};

use crate::{
  Error, Result,
  platform::Platform,
  record::{CertificationRecord, Status},
};

/// Every platform mapped to its ordered records.
///
/// Always holds a (possibly empty) sequence for every [`Platform`], so
/// exports list all keys in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
  platforms: BTreeMap<Platform, Vec<CertificationRecord>>,
}

/// Top-level import document. Unlike a plain map it refuses a platform key
/// that appears twice instead of keeping the last array.
struct StrictDocument(BTreeMap<Platform, Vec<CertificationRecord>>);

impl<'de> Deserialize<'de> for StrictDocument {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
    struct DocumentVisitor;

    impl<'de> Visitor<'de> for DocumentVisitor {
      type Value = StrictDocument;

      fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object mapping platform keys to record arrays")
      }

      fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> std::result::Result<Self::Value, A::Error> {
        let mut platforms = BTreeMap::new();
        while let Some(platform) = map.next_key::<Platform>()? {
          match platforms.entry(platform) {
            Entry::Occupied(_) => {
              return Err(de::Error::custom(format!("duplicate platform key {platform}")));
            }
            Entry::Vacant(slot) => {
              slot.insert(map.next_value::<Vec<CertificationRecord>>()?);
            }
          }
        }
        Ok(StrictDocument(platforms))
      }
    }

    deserializer.deserialize_map(DocumentVisitor)
  }
}

impl Default for Catalog {
  fn default() -> Self {
    Self {
      platforms: Platform::all().map(|p| (p, Vec::new())).collect(),
    }
  }
}

impl Catalog {
  /// Build a catalog from explicit sequences, normalising every record and
  /// rejecting duplicate ids. Platforms not mentioned are empty.
  pub fn from_records(
    records: impl IntoIterator<Item = (Platform, Vec<CertificationRecord>)>,
  ) -> Result<Self> {
    let mut catalog = Self::default();
    for (platform, seq) in records {
      catalog.platforms.insert(platform, seq);
    }
    catalog.normalize();
    catalog.validate()?;
    Ok(catalog)
  }

  /// Parse an exported document.
  ///
  /// Any structural problem (not JSON, unknown platform key, missing required
  /// field, bad date or status, duplicate id) is reported as
  /// [`Error::Parse`].
  pub fn from_json(input: &str) -> Result<Self> {
    let StrictDocument(platforms) =
      serde_json::from_str(input).map_err(|e| Error::Parse(e.to_string()))?;
    Self::from_records(platforms)
  }

  /// Pretty-printed JSON with stable key and field ordering.
  pub fn to_json_pretty(&self) -> Result<String> {
    Ok(serde_json::to_string_pretty(self)?)
  }

  /// Check that ids are non-empty and unique within each platform.
  pub fn validate(&self) -> Result<()> {
    for (platform, records) in &self.platforms {
      let mut seen = HashSet::with_capacity(records.len());
      for record in records {
        if record.id.trim().is_empty() {
          return Err(Error::Parse(format!("{platform}: record with empty id")));
        }
        if !seen.insert(record.id.as_str()) {
          return Err(Error::Parse(format!(
            "{platform}: duplicate id {:?}",
            record.id
          )));
        }
      }
    }
    Ok(())
  }

  /// Ensure every platform has a sequence and every record satisfies
  /// [`CertificationRecord::normalize`].
  pub fn normalize(&mut self) {
    for platform in Platform::all() {
      self.platforms.entry(platform).or_default();
    }
    for (platform, records) in &mut self.platforms {
      for record in records.iter_mut() {
        record.normalize(*platform);
      }
    }
  }

  /// The sequence for `platform`, in order.
  pub fn records(&self, platform: Platform) -> &[CertificationRecord] {
    self.platforms.get(&platform).map(Vec::as_slice).unwrap_or_default()
  }

  /// Mutable access to one platform's sequence. Callers are responsible for
  /// keeping ids unique.
  pub fn records_mut(&mut self, platform: Platform) -> &mut Vec<CertificationRecord> {
    self.platforms.entry(platform).or_default()
  }

  /// `(platform, records)` pairs in declaration order.
  pub fn iter(&self) -> impl Iterator<Item = (Platform, &[CertificationRecord])> {
    self.platforms.iter().map(|(p, r)| (*p, r.as_slice()))
  }

  /// Total number of records across all platforms.
  pub fn len(&self) -> usize { self.platforms.values().map(Vec::len).sum() }

  pub fn is_empty(&self) -> bool { self.len() == 0 }

  /// The conventional download name for an export taken on `date`.
  pub fn export_filename(date: NaiveDate) -> String {
    format!("certifications-{}.json", date.format("%Y-%m-%d"))
  }

  /// The demonstration catalog a fresh manager starts with.
  pub fn sample() -> Self {
    fn rec(
      id: &str,
      title: &str,
      description: &str,
      url: &str,
      date: (i32, u32, u32),
      status: Status,
      badge_url: Option<&str>,
    ) -> CertificationRecord {
      CertificationRecord {
        id: id.to_owned(),
        title: title.to_owned(),
        description: description.to_owned(),
        url: url.to_owned(),
        date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap_or_default(),
        status,
        badge_url: badge_url.map(str::to_owned),
        card_html: None,
        card_markdown: None,
      }
    }

    let roadmap_card = "https://roadmap.sh/card/wide/68e05fc0399d9064911d1bfb?variant=dark&roadmaps=";
    let mut frontend = rec(
      "rm-1",
      "Frontend Developer Roadmap",
      "Completed frontend development learning path with progress tracking",
      "https://roadmap.sh/u/diogomendesneves",
      (2024, 4, 1),
      Status::InProgress,
      Some(roadmap_card),
    );
    frontend.card_html = Some(format!(
      r#"<a href="https://roadmap.sh"><img src="{roadmap_card}" alt="roadmap.sh"/></a>"#
    ));
    frontend.card_markdown = Some(format!("[![roadmap.sh]({roadmap_card})](https://roadmap.sh)"));

    let mut catalog = Self::default();
    catalog.platforms.insert(Platform::MicrosoftLearn, vec![
      rec(
        "ms-1",
        "Azure Fundamentals",
        "Microsoft Azure Fundamentals certification covering cloud concepts, services, and solutions",
        "https://learn.microsoft.com/users/diogomendesneves-9530/transcript/dlmgfe8oy2x3k9v",
        (2024, 1, 15),
        Status::Active,
        Some("https://learn.microsoft.com/media/learn/certification/badges/microsoft-certified-fundamentals-badge.svg"),
      ),
      rec(
        "ms-2",
        "DevOps Engineer Expert",
        "Microsoft Azure DevOps Solutions certification for implementing DevOps processes",
        "https://learn.microsoft.com/certifications/devops-engineer",
        (2024, 3, 20),
        Status::InProgress,
        None,
      ),
    ]);
    catalog.platforms.insert(Platform::GoogleSkills, vec![rec(
      "gs-1",
      "Google Cloud Associate",
      "Google Cloud Platform Associate Cloud Engineer certification",
      "https://www.skills.google/public_profiles/ab0b5e96-2e96-4f19-8161-4da5a721e955",
      (2024, 2, 10),
      Status::Active,
      Some("https://api.accredible.com/v1/frontend/credential_website_embed_image/badge/123456"),
    )]);
    catalog.platforms.insert(Platform::AwsSkillbuilder, vec![rec(
      "aws-1",
      "AWS Cloud Practitioner",
      "AWS Certified Cloud Practitioner foundational certification",
      "https://skillsprofile.skillbuilder.aws/user/diogo-mendes-neves",
      (2024, 1, 30),
      Status::Active,
      Some("https://images.credly.com/size/340x340/images/00634f82-b07f-4bbd-a6bb-53de397fc3a6/image.png"),
    )]);
    catalog.platforms.insert(Platform::Roadmapsh, vec![frontend]);
    catalog
  }
}
