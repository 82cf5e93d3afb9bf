//! Field validation for incoming contact forms.
//!
//! Runs independently of any transport: give it a [`ContactForm`] and get back
//! every failure at once.

use std::fmt;

use thiserror::Error;

use crate::submission::ContactForm;

// ─── Fields ──────────────────────────────────────────────────────────────────

/// One of the four user-supplied fields, in the order errors are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
  Name,
  Email,
  Subject,
  Message,
}

impl Field {
  pub const ALL: [Field; 4] =
    [Field::Name, Field::Email, Field::Subject, Field::Message];

  /// Maximum length in characters.
  pub fn max_len(self) -> usize {
    match self {
      Field::Name => 100,
      Field::Email => 150,
      Field::Subject => 200,
      Field::Message => 1000,
    }
  }

  pub fn label(self) -> &'static str {
    match self {
      Field::Name => "Name",
      Field::Email => "Email",
      Field::Subject => "Subject",
      Field::Message => "Message",
    }
  }

  fn value(self, form: &ContactForm) -> Option<&str> {
    match self {
      Field::Name => form.name.as_deref(),
      Field::Email => form.email.as_deref(),
      Field::Subject => form.subject.as_deref(),
      Field::Message => form.message.as_deref(),
    }
  }
}

// ─── Errors ──────────────────────────────────────────────────────────────────

/// A single validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
  #[error("The {} field is required.", .0.label())]
  Required(Field),

  #[error(
    "The field {} must be a string with a maximum length of {}.",
    .0.label(),
    .0.max_len()
  )]
  TooLong(Field),

  #[error("The {} field is not a valid e-mail address.", .0.label())]
  InvalidEmail(Field),

  #[error("The {} field contains a NUL character.", .0.label())]
  NulCharacter(Field),
}

impl FieldError {
  pub fn field(&self) -> Field {
    match self {
      FieldError::Required(f)
      | FieldError::TooLong(f)
      | FieldError::InvalidEmail(f)
      | FieldError::NulCharacter(f) => *f,
    }
  }
}

/// Every failure found in one form, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
  pub fn is_empty(&self) -> bool { self.0.is_empty() }

  pub fn errors(&self) -> &[FieldError] { &self.0 }
}

impl fmt::Display for ValidationErrors {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (i, e) in self.0.iter().enumerate() {
      if i > 0 {
        f.write_str(", ")?;
      }
      write!(f, "{e}")?;
    }
    Ok(())
  }
}

impl std::error::Error for ValidationErrors {}

// ─── Checks ──────────────────────────────────────────────────────────────────

/// Collect all validation failures for `form`.
///
/// A blank field reports only [`FieldError::Required`]. A present email may
/// report both [`FieldError::TooLong`] and [`FieldError::InvalidEmail`].
/// NUL is rejected outright: SQLite's `length()` stops at it, so the schema's
/// length checks would fail on a value this function had accepted.
pub fn check(form: &ContactForm) -> ValidationErrors {
  let mut errors = Vec::new();

  for field in Field::ALL {
    let value = match field.value(form) {
      Some(v) if !v.trim().is_empty() => v,
      _ => {
        errors.push(FieldError::Required(field));
        continue;
      }
    };

    if value.contains('\0') {
      errors.push(FieldError::NulCharacter(field));
    }
    if value.chars().count() > field.max_len() {
      errors.push(FieldError::TooLong(field));
    }
    if field == Field::Email && !is_plausible_email(value) {
      errors.push(FieldError::InvalidEmail(field));
    }
  }

  ValidationErrors(errors)
}

/// Loose syntactic check: exactly one `@` with something on either side, and
/// no line breaks.
pub fn is_plausible_email(s: &str) -> bool {
  if s.contains(['\r', '\n']) {
    return false;
  }
  match s.split_once('@') {
    Some((local, domain)) => {
      !local.is_empty() && !domain.is_empty() && !domain.contains('@')
    }
    None => false,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn form(name: &str, email: &str, subject: &str, message: &str) -> ContactForm {
    ContactForm {
      name:    Some(name.into()),
      email:   Some(email.into()),
      subject: Some(subject.into()),
      message: Some(message.into()),
    }
  }

  #[test]
  fn valid_form_has_no_errors() {
    let errors = check(&form("Ana", "ana@x.com", "Hi", "Hello"));
    assert!(errors.is_empty());
  }

  #[test]
  fn missing_fields_are_all_reported_in_order() {
    let errors = check(&ContactForm::default());
    let fields: Vec<Field> = errors.errors().iter().map(FieldError::field).collect();
    assert_eq!(fields, Field::ALL.to_vec());
    assert!(
      errors
        .errors()
        .iter()
        .all(|e| matches!(e, FieldError::Required(_)))
    );
  }

  #[test]
  fn whitespace_only_counts_as_missing() {
    let errors = check(&form("Ana", "ana@x.com", " \t ", "Hello"));
    assert_eq!(errors.errors(), &[FieldError::Required(Field::Subject)]);
  }

  #[test]
  fn max_lengths_are_inclusive() {
    let at_limit = form(
      &"n".repeat(100),
      &format!("{}@x.com", "e".repeat(144)),
      &"s".repeat(200),
      &"m".repeat(1000),
    );
    assert!(check(&at_limit).is_empty());

    let over = form(
      &"n".repeat(101),
      "ana@x.com",
      &"s".repeat(201),
      &"m".repeat(1001),
    );
    assert_eq!(
      check(&over).errors(),
      &[
        FieldError::TooLong(Field::Name),
        FieldError::TooLong(Field::Subject),
        FieldError::TooLong(Field::Message),
      ]
    );
  }

  #[test]
  fn length_counts_characters_not_bytes() {
    // 100 two-byte characters.
    let errors = check(&form(&"é".repeat(100), "ana@x.com", "Hi", "Hello"));
    assert!(errors.is_empty());
  }

  #[test]
  fn long_invalid_email_reports_both() {
    let errors = check(&form("Ana", &"e".repeat(151), "Hi", "Hello"));
    assert_eq!(
      errors.errors(),
      &[
        FieldError::TooLong(Field::Email),
        FieldError::InvalidEmail(Field::Email),
      ]
    );
  }

  #[test]
  fn email_plausibility() {
    assert!(is_plausible_email("ana@x.com"));
    assert!(is_plausible_email("a@b"));
    assert!(!is_plausible_email("ana"));
    assert!(!is_plausible_email("@x.com"));
    assert!(!is_plausible_email("ana@"));
    assert!(!is_plausible_email("a@b@c"));
    assert!(!is_plausible_email("ana@x.com\r\nBcc: eve@y.com"));
  }

  #[test]
  fn nul_characters_are_rejected() {
    let errors = check(&form("\0Ana", "ana@x.com", "Hi", "Hel\0lo"));
    assert_eq!(
      errors.errors(),
      &[
        FieldError::NulCharacter(Field::Name),
        FieldError::NulCharacter(Field::Message),
      ]
    );

    // Other control characters are ordinary message content.
    assert!(check(&form("Ana", "ana@x.com", "Hi", "line one\n\tline two")).is_empty());
  }

  #[test]
  fn messages_are_joined_with_commas() {
    let errors = check(&form("", "nope", "Hi", "Hello"));
    assert_eq!(
      errors.to_string(),
      "The Name field is required., The Email field is not a valid e-mail address."
    );
  }
}
