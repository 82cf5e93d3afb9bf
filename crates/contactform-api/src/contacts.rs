//! Handlers for `/contacts` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/contacts` | Body: [`ContactForm`]; 200 + [`ContactResponse`], 400 on invalid input |
//! | `GET`  | `/contacts` | Newest first |
//! | `GET`  | `/contacts/{id}` | 404 if not found |
//! | `PUT`  | `/contacts/{id}/mark-read` | 204; 404 if not found |

use std::sync::Arc;

use axum::{
  Json,
  extract::{
    Path, State,
    rejection::{JsonRejection, PathRejection},
  },
  http::StatusCode,
};
use contactform_core::{
  ContactForm, Submission, SubmissionId, store::SubmissionStore,
};
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, UNEXPECTED_MESSAGE};

pub const ACKNOWLEDGEMENT: &str =
  "Thank you for your message! I'll get back to you soon.";

/// Body of every create response and of every JSON error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactResponse {
  pub success:    bool,
  pub message:    String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub contact_id: Option<SubmissionId>,
}

impl ContactResponse {
  pub fn failure(message: impl Into<String>) -> Self {
    Self { success: false, message: message.into(), contact_id: None }
  }
}

fn path_id(
  path: Result<Path<SubmissionId>, PathRejection>,
) -> Result<SubmissionId, ApiError> {
  path
    .map(|Path(id)| id)
    .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /contacts`
#[tracing::instrument(skip_all)]
pub async fn create<S>(
  State(store): State<Arc<S>>,
  body: Result<Json<ContactForm>, JsonRejection>,
) -> Result<Json<ContactResponse>, ApiError>
where
  S: SubmissionStore,
{
  let Json(form) =
    body.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
  let submission = form.validate()?;

  let name = submission.name().to_owned();
  let email = submission.email().to_owned();

  let id = store
    .insert(submission)
    .await
    .map_err(ApiError::store(UNEXPECTED_MESSAGE))?;

  tracing::info!(contact_id = id, %name, %email, "new contact form submitted");

  Ok(Json(ContactResponse {
    success:    true,
    message:    ACKNOWLEDGEMENT.to_owned(),
    contact_id: Some(id),
  }))
}

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /contacts`
#[tracing::instrument(skip_all)]
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<Submission>>, ApiError>
where
  S: SubmissionStore,
{
  let submissions = store
    .list_all()
    .await
    .map_err(ApiError::store("Error retrieving contacts"))?;
  Ok(Json(submissions))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /contacts/{id}`
#[tracing::instrument(skip_all, fields(id = tracing::field::Empty))]
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  path: Result<Path<SubmissionId>, PathRejection>,
) -> Result<Json<Submission>, ApiError>
where
  S: SubmissionStore,
{
  let id = path_id(path)?;
  tracing::Span::current().record("id", id);

  let submission = store
    .find_by_id(id)
    .await
    .map_err(ApiError::store("Error retrieving contact"))?
    .ok_or(ApiError::NotFound)?;
  Ok(Json(submission))
}

// ─── Mark read ────────────────────────────────────────────────────────────────

/// `PUT /contacts/{id}/mark-read`
#[tracing::instrument(skip_all, fields(id = tracing::field::Empty))]
pub async fn mark_read<S>(
  State(store): State<Arc<S>>,
  path: Result<Path<SubmissionId>, PathRejection>,
) -> Result<StatusCode, ApiError>
where
  S: SubmissionStore,
{
  let id = path_id(path)?;
  tracing::Span::current().record("id", id);

  let found = store
    .mark_read(id)
    .await
    .map_err(ApiError::store("Error updating contact"))?;

  if found {
    Ok(StatusCode::NO_CONTENT)
  } else {
    Err(ApiError::NotFound)
  }
}
