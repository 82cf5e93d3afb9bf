//! The `SubmissionStore` trait.
//!
//! Implemented by storage backends (e.g. `contactform-store-sqlite`). The API
//! layer depends on this abstraction, not on any concrete backend.

use std::future::Future;

use crate::submission::{NewSubmission, Submission, SubmissionId};

/// Abstraction over a submission store backend.
///
/// Each method is a single atomic operation from the caller's point of view;
/// the backend is responsible for serialising conflicting writes.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait SubmissionStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Persist a new submission and return its id. The store sets
  /// `created_at` to now and `is_read` to `false`.
  fn insert(
    &self,
    submission: NewSubmission,
  ) -> impl Future<Output = Result<SubmissionId, Self::Error>> + Send + '_;

  /// All submissions, newest first.
  fn list_all(
    &self,
  ) -> impl Future<Output = Result<Vec<Submission>, Self::Error>> + Send + '_;

  /// Retrieve a submission by id. Returns `None` if not found.
  fn find_by_id(
    &self,
    id: SubmissionId,
  ) -> impl Future<Output = Result<Option<Submission>, Self::Error>> + Send + '_;

  /// Flag a submission as read.
  ///
  /// Returns `false` if no such submission exists. Marking an already-read
  /// submission succeeds and changes nothing.
  fn mark_read(
    &self,
    id: SubmissionId,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;
}
