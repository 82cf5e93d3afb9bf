//! Submission types — the one entity the backend stores.
//!
//! A [`ContactForm`] is what arrives over the wire, unvalidated. Validation
//! turns it into a [`NewSubmission`], the only thing a store will accept. The
//! store assigns an id and a timestamp and hands back [`Submission`]s.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::validate::{self, ValidationErrors};

/// Store-assigned identifier. Positive, never reused.
pub type SubmissionId = i64;

// ─── Persisted record ────────────────────────────────────────────────────────

/// A persisted contact-form submission.
///
/// `is_read` only ever moves from `false` to `true`; nothing else changes
/// after insertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
  pub id:         SubmissionId,
  pub name:       String,
  pub email:      String,
  pub subject:    String,
  pub message:    String,
  pub created_at: DateTime<Utc>,
  pub is_read:    bool,
}

// ─── Candidate ───────────────────────────────────────────────────────────────

/// A submission as received from a client. Every field may be missing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactForm {
  pub name:    Option<String>,
  pub email:   Option<String>,
  pub subject: Option<String>,
  pub message: Option<String>,
}

impl ContactForm {
  /// Check every field and, if all pass, produce a [`NewSubmission`].
  ///
  /// All failures are collected; the first one does not short-circuit.
  pub fn validate(self) -> Result<NewSubmission, ValidationErrors> {
    let errors = validate::check(&self);

    // A missing field always produces an error, so the guard covers both.
    match (self.name, self.email, self.subject, self.message) {
      (Some(name), Some(email), Some(subject), Some(message))
        if errors.is_empty() =>
      {
        Ok(NewSubmission { name, email, subject, message })
      }
      _ => Err(errors),
    }
  }
}

// ─── Validated input ─────────────────────────────────────────────────────────

/// A validated submission, ready to be inserted.
///
/// Only constructible through validation, so a store never sees a blank or
/// oversized field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSubmission {
  name:    String,
  email:   String,
  subject: String,
  message: String,
}

impl NewSubmission {
  /// Validate the four fields directly.
  pub fn new(
    name: impl Into<String>,
    email: impl Into<String>,
    subject: impl Into<String>,
    message: impl Into<String>,
  ) -> Result<Self, ValidationErrors> {
    ContactForm {
      name:    Some(name.into()),
      email:   Some(email.into()),
      subject: Some(subject.into()),
      message: Some(message.into()),
    }
    .validate()
  }

  pub fn name(&self) -> &str { &self.name }

  pub fn email(&self) -> &str { &self.email }

  pub fn subject(&self) -> &str { &self.subject }

  pub fn message(&self) -> &str { &self.message }
}

#[cfg(test)]
mod tests {
  use chrono::TimeZone as _;

  use super::*;

  #[test]
  fn submission_serialises_camel_case() {
    let s = Submission {
      id:         1,
      name:       "Ana".into(),
      email:      "ana@x.com".into(),
      subject:    "Hi".into(),
      message:    "Hello".into(),
      created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
      is_read:    false,
    };
    let json = serde_json::to_value(&s).unwrap();
    assert_eq!(json["id"], 1);
    assert_eq!(json["isRead"], false);
    assert_eq!(json["createdAt"], "2024-05-01T12:00:00Z");
    assert!(json.get("is_read").is_none());
  }

  #[test]
  fn form_deserialises_with_missing_fields() {
    let form: ContactForm =
      serde_json::from_str(r#"{"name":"Ana","email":"ana@x.com"}"#).unwrap();
    assert_eq!(form.name.as_deref(), Some("Ana"));
    assert!(form.subject.is_none());
    assert!(form.message.is_none());
  }

  #[test]
  fn new_submission_keeps_fields_verbatim() {
    let s = NewSubmission::new("Ana", "ana@x.com", "Hi", "  Hello  ").unwrap();
    assert_eq!(s.name(), "Ana");
    assert_eq!(s.email(), "ana@x.com");
    assert_eq!(s.subject(), "Hi");
    assert_eq!(s.message(), "  Hello  ");
  }

  #[test]
  fn new_submission_rejects_blank_name() {
    let err = NewSubmission::new("   ", "ana@x.com", "Hi", "Hello").unwrap_err();
    assert_eq!(err.to_string(), "The Name field is required.");
  }
}
