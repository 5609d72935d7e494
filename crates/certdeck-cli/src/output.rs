//! Plain-text rendering of API results for the terminal.

use std::fmt::Write as _;

use certdeck_core::record::CertificationRecord;

use crate::client::PlatformSummary;

const TITLE_WIDTH: usize = 36;

/// One line per platform: icon, key, display name, accent, record count.
pub fn platforms(rows: &[PlatformSummary]) -> String {
  let mut out = String::new();
  for row in rows {
    let _ = writeln!(
      out,
      "{} {:<18} {:<18} {}  {:>3}",
      row.icon,
      row.platform.to_string(),
      row.name,
      row.color,
      row.count
    );
  }
  out
}

/// A compact table of records in the order given.
pub fn records(rows: &[CertificationRecord]) -> String {
  if rows.is_empty() {
    return "No certifications found.\n".to_string();
  }
  let id_width = rows.iter().map(|r| r.id.chars().count()).max().unwrap_or(2).max(2);

  let mut out = String::new();
  let _ = writeln!(
    out,
    "{:<id_width$}  {:<10}  {:<11}  {}",
    "ID", "DATE", "STATUS", "TITLE"
  );
  for r in rows {
    let _ = writeln!(
      out,
      "{:<id_width$}  {:<10}  {:<11}  {}",
      r.id,
      r.date.format("%Y-%m-%d").to_string(),
      r.status.to_string(),
      truncate(&r.title, TITLE_WIDTH)
    );
  }
  out
}

/// Every field of a single record, one per line.
pub fn detail(r: &CertificationRecord) -> String {
  let mut out = String::new();
  let _ = writeln!(out, "id:          {}", r.id);
  let _ = writeln!(out, "title:       {}", r.title);
  let _ = writeln!(out, "description: {}", r.description);
  let _ = writeln!(out, "url:         {}", r.url);
  let _ = writeln!(out, "date:        {}", r.date.format("%Y-%m-%d"));
  let _ = writeln!(out, "status:      {}", r.status);
  if let Some(badge) = &r.badge_url {
    let _ = writeln!(out, "badge:       {badge}");
  }
  if let Some(html) = &r.card_html {
    let _ = writeln!(out, "card html:   {html}");
  }
  if let Some(md) = &r.card_markdown {
    let _ = writeln!(out, "card md:     {md}");
  }
  out
}

fn truncate(s: &str, max: usize) -> String {
  if s.chars().count() <= max {
    return s.to_string();
  }
  let mut cut: String = s.chars().take(max.saturating_sub(1)).collect();
  cut.push('…');
  cut
}

#[cfg(test)]
mod tests {
  use certdeck_core::{
    catalog::Catalog,
    platform::Platform,
  };

  use super::*;

  #[test]
  fn records_table_has_header_and_rows() {
    let catalog = Catalog::sample();
    let table = records(catalog.records(Platform::MicrosoftLearn));
    let lines: Vec<_> = table.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("ID"));
    assert!(lines[1].starts_with("ms-1  2024-01-15  Active"));
    assert!(lines[2].contains("In Progress"));
    assert!(lines[2].ends_with("DevOps Engineer Expert"));
  }

  #[test]
  fn empty_records_table() {
    assert_eq!(records(&[]), "No certifications found.\n");
  }

  #[test]
  fn detail_skips_absent_optionals() {
    let catalog = Catalog::sample();
    let ms2 = &catalog.records(Platform::MicrosoftLearn)[1];
    let text = detail(ms2);
    assert!(text.contains("status:      In Progress"));
    assert!(!text.contains("badge:"));

    let rm1 = &catalog.records(Platform::Roadmapsh)[0];
    assert!(detail(rm1).contains("card md:"));
  }

  #[test]
  fn long_titles_are_truncated() {
    let long = "x".repeat(50);
    let cut = truncate(&long, 10);
    assert_eq!(cut.chars().count(), 10);
    assert!(cut.ends_with('…'));
    assert_eq!(truncate("short", 10), "short");
  }

  #[test]
  fn platform_lines() {
    let rows = vec![PlatformSummary {
      platform: Platform::Custom,
      name:     "Custom".to_string(),
      color:    "#6B7280".to_string(),
      icon:     "⭐".to_string(),
      count:    4,
    }];
    let text = platforms(&rows);
    assert!(text.starts_with("⭐ custom"));
    assert!(text.trim_end().ends_with('4'));
  }
}
