//! The fixed set of certification-issuing platforms.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator as _};

/// A certification-issuing source. The set is closed; records are always
/// filed under exactly one platform.
///
/// Variant order is significant: it is the tab order, the export key order,
/// and the `Ord` used by [`crate::catalog::Catalog`].
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  PartialOrd,
  Ord,
  Hash,
  Serialize,
  Deserialize,
  Display,
  EnumString,
  EnumIter,
  AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Platform {
  MicrosoftLearn,
  GoogleSkills,
  AwsSkillbuilder,
  Roadmapsh,
  Custom,
}

/// Display metadata for a platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlatformInfo {
  pub platform:    Platform,
  pub name:        &'static str,
  /// CSS hex colour used for headings and links in generated markup.
  pub color:       &'static str,
  pub icon:        &'static str,
  pub description: &'static str,
}

impl Platform {
  /// All platforms in declaration order.
  pub fn all() -> impl Iterator<Item = Platform> { Self::iter() }

  /// Whether records on this platform may carry the embeddable
  /// `card_html` / `card_markdown` snippets.
  pub fn supports_card_embeds(self) -> bool { matches!(self, Self::Roadmapsh) }

  pub fn info(self) -> PlatformInfo {
    let (name, color, icon, description) = match self {
      Self::MicrosoftLearn => (
        "Microsoft Learn",
        "#0078D4",
        "🔷",
        "Microsoft Learn profiles can be linked through public transcript pages",
      ),
      Self::GoogleSkills => (
        "Google Skills",
        "#4285F4",
        "🔹",
        "Google Skills profiles use public profile URLs that can be linked directly",
      ),
      Self::AwsSkillbuilder => (
        "AWS SkillBuilder",
        "#FF9900",
        "🟧",
        "AWS SkillBuilder profiles have public URLs for sharing achievements",
      ),
      Self::Roadmapsh => (
        "Roadmap.sh",
        "#7C3AED",
        "🛣️",
        "Roadmap.sh provides HTML and Markdown card embeds for profiles and sites",
      ),
      Self::Custom => (
        "Custom",
        "#6B7280",
        "⭐",
        "Custom certification cards for any other platform",
      ),
    };
    PlatformInfo { platform: self, name, color, icon, description }
  }
}
