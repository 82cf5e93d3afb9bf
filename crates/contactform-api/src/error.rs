//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use contactform_core::ValidationErrors;
use thiserror::Error;

use crate::contacts::ContactResponse;

/// Generic message for failures the client can do nothing about.
pub const UNEXPECTED_MESSAGE: &str =
  "Something went wrong. Please try again later.";

/// An error returned by an API handler.
///
/// Every variant except [`ApiError::NotFound`] renders as a
/// `{"success":false,"message":...}` body.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("validation failed: {0}")]
  Validation(#[from] ValidationErrors),

  #[error("bad request: {0}")]
  BadRequest(String),

  #[error("not found")]
  NotFound,

  /// `message` is what the client sees; `source` is only logged.
  #[error("store error ({message}): {source}")]
  Store {
    message: &'static str,
    #[source]
    source:  Box<dyn std::error::Error + Send + Sync>,
  },

  #[error("unexpected error: {0}")]
  Unexpected(String),
}

impl ApiError {
  /// Adapter for `map_err` that logs a store error and boxes it under a
  /// public message.
  ///
  /// The log is emitted here, while the handler's span (and its `id` field)
  /// is still entered; `into_response` runs after that span has closed.
  pub fn store<E>(message: &'static str) -> impl FnOnce(E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    move |e| {
      tracing::error!(error = %e, "{message}");
      ApiError::Store { message, source: Box::new(e) }
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, message) = match self {
      ApiError::Validation(errors) => (StatusCode::BAD_REQUEST, errors.to_string()),
      ApiError::BadRequest(m) => (StatusCode::BAD_REQUEST, m),
      ApiError::NotFound => return StatusCode::NOT_FOUND.into_response(),
      ApiError::Store { message, .. } => {
        (StatusCode::INTERNAL_SERVER_ERROR, message.to_owned())
      }
      ApiError::Unexpected(detail) => {
        tracing::error!(error = %detail, "unexpected failure");
        (StatusCode::INTERNAL_SERVER_ERROR, UNEXPECTED_MESSAGE.to_owned())
      }
    };
    (status, Json(ContactResponse::failure(message))).into_response()
  }
}
