//! The `<section>` markup.

use std::fmt::Write as _;

use certdeck_core::{
  platform::PlatformInfo,
  record::{CertificationRecord, Status},
};
use chrono::NaiveDate;

use crate::escape::escape_html;

/// CSS modifier class for a status: `active`, `in-progress`, `expired`.
pub fn status_class(status: Status) -> &'static str {
  match status {
    Status::Active     => "active",
    Status::InProgress => "in-progress",
    Status::Expired    => "expired",
  }
}

/// Short day-first date, e.g. `15/01/2024`.
pub fn format_date(date: NaiveDate) -> String { date.format("%d/%m/%Y").to_string() }

pub(crate) fn section(info: &PlatformInfo, records: &[CertificationRecord]) -> String {
  let mut html = String::new();
  // Writing into a String cannot fail.
  let _ = writeln!(
    html,
    r#"<section class="certifications-section" data-platform="{}">"#,
    info.platform
  );
  let _ = writeln!(html, "  <h2>{}</h2>", escape_html(info.name));
  html.push_str("  <div class=\"certifications-grid\">\n");
  for record in records {
    card(&mut html, record);
  }
  html.push_str("  </div>\n");
  html.push_str("</section>");
  html
}

fn card(html: &mut String, record: &CertificationRecord) {
  let title = escape_html(&record.title);
  let badge = record
    .badge_url
    .as_deref()
    .filter(|url| !url.is_empty())
    .map(|url| format!(r#"<img src="{}" alt="{title}" />"#, escape_html(url)))
    .unwrap_or_default();

  let _ = writeln!(html, "    <div class=\"cert-card\">");
  let _ = writeln!(html, "      <div class=\"cert-badge\">{badge}</div>");
  let _ = writeln!(html, "      <h3>{title}</h3>");
  let _ = writeln!(html, "      <p>{}</p>", escape_html(&record.description));
  let _ = writeln!(html, "      <div class=\"cert-meta\">");
  let _ = writeln!(
    html,
    "        <span class=\"cert-date\">{}</span>",
    format_date(record.date)
  );
  let _ = writeln!(
    html,
    "        <span class=\"cert-status {}\">{}</span>",
    status_class(record.status),
    record.status
  );
  let _ = writeln!(html, "      </div>");
  let _ = writeln!(
    html,
    "      <a href=\"{}\" target=\"_blank\" class=\"cert-link\">View certification</a>",
    escape_html(&record.url)
  );
  let _ = writeln!(html, "    </div>");
}
