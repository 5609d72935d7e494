//! Static HTML/CSS snippet generator for certdeck.
//!
//! Turns one platform's records into a self-contained `<section>` and a
//! matching stylesheet that can be pasted into any site. Pure synchronous;
//! no HTTP or storage dependencies.
//!
//! # Quick start
//!
//! ```no_run
//! use certdeck_core::{catalog::Catalog, platform::Platform};
//!
//! let catalog = Catalog::sample();
//! let snippet = certdeck_render::generate(
//!   Platform::MicrosoftLearn,
//!   catalog.records(Platform::MicrosoftLearn),
//! );
//! println!("{}\n\n{}", snippet.html, snippet.css);
//! ```

mod css;
mod escape;
mod html;

use certdeck_core::{platform::Platform, record::CertificationRecord};
use serde::Serialize;

pub use escape::escape_html;
pub use html::{format_date, status_class};

// ─── Public types ─────────────────────────────────────────────────────────────

/// Generated markup for one platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snippet {
  pub html: String,
  pub css:  String,
}

// ─── Public API ───────────────────────────────────────────────────────────────

/// Render `records` (in the given order) as an HTML section plus stylesheet
/// themed with `platform`'s accent colour.
///
/// Deterministic: the same input always yields byte-identical output. All
/// user-supplied text is escaped before it is embedded.
pub fn generate(platform: Platform, records: &[CertificationRecord]) -> Snippet {
  let info = platform.info();
  Snippet {
    html: html::section(&info, records),
    css:  css::stylesheet(info.color),
  }
}
