//! Record id assignment.
//!
//! Ids take the form `<platform>-<unix millis>`. Two adds inside the same
//! millisecond would collide, so a `-N` suffix is appended until the id is
//! free within the platform's sequence.

use certdeck_core::{platform::Platform, record::CertificationRecord};

pub(crate) fn next_id(
  platform: Platform,
  millis:   i64,
  existing: &[CertificationRecord],
) -> String {
  let taken = |id: &str| existing.iter().any(|r| r.id == id);

  let base = format!("{platform}-{millis}");
  if !taken(&base) {
    return base;
  }
  let mut n = 2u64;
  loop {
    let candidate = format!("{base}-{n}");
    if !taken(&candidate) {
      return candidate;
    }
    n += 1;
  }
}

#[cfg(test)]
mod tests {
  use certdeck_core::record::{NewRecord, Status};
  use chrono::NaiveDate;

  use super::*;

  fn with_id(id: &str) -> CertificationRecord {
    NewRecord::new("t", "d", "u", NaiveDate::default(), Status::Active)
      .into_record(id.into(), Platform::Custom)
  }

  #[test]
  fn uses_platform_and_timestamp() {
    assert_eq!(next_id(Platform::GoogleSkills, 42, &[]), "google_skills-42");
  }

  #[test]
  fn suffixes_on_collision() {
    let existing = vec![with_id("custom-7"), with_id("custom-7-2")];
    assert_eq!(next_id(Platform::Custom, 7, &existing), "custom-7-3");
  }
}
