//! Encoding and decoding helpers between domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps are stored as RFC 3339 strings with a fixed microsecond
//! precision and a `Z` suffix, so string order matches time order.

use chrono::{DateTime, SecondsFormat, Utc};
use contactform_core::Submission;

use crate::{Error, Result};

// ─── DateTime<Utc>
// ────────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String {
  dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Columns selected for every submission read, in [`RawSubmission`] order.
pub const SUBMISSION_COLUMNS: &str =
  "id, name, email, subject, message, created_at, is_read";

/// Raw values read directly from a `contacts` row.
pub struct RawSubmission {
  pub id:         i64,
  pub name:       String,
  pub email:      String,
  pub subject:    String,
  pub message:    String,
  pub created_at: String,
  pub is_read:    bool,
}

impl RawSubmission {
  /// Map a row selected with [`SUBMISSION_COLUMNS`].
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:         row.get(0)?,
      name:       row.get(1)?,
      email:      row.get(2)?,
      subject:    row.get(3)?,
      message:    row.get(4)?,
      created_at: row.get(5)?,
      is_read:    row.get(6)?,
    })
  }

  pub fn into_submission(self) -> Result<Submission> {
    Ok(Submission {
      id:         self.id,
      name:       self.name,
      email:      self.email,
      subject:    self.subject,
      message:    self.message,
      created_at: decode_dt(&self.created_at)?,
      is_read:    self.is_read,
    })
  }
}

#[cfg(test)]
mod tests {
  use chrono::TimeZone as _;

  use super::*;

  #[test]
  fn encoded_timestamps_are_fixed_width() {
    let whole = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    let fractional = whole + chrono::Duration::microseconds(1);
    let a = encode_dt(whole);
    let b = encode_dt(fractional);
    assert_eq!(a, "2024-05-01T12:00:00.000000Z");
    assert_eq!(a.len(), b.len());
    assert!(a < b);
  }

  #[test]
  fn timestamp_roundtrip() {
    let dt = Utc.with_ymd_and_hms(2023, 1, 2, 3, 4, 5).unwrap();
    assert_eq!(decode_dt(&encode_dt(dt)).unwrap(), dt);
  }

  #[test]
  fn bad_timestamp_is_date_parse_error() {
    assert!(matches!(decode_dt("yesterday"), Err(Error::DateParse(_))));
  }
}
