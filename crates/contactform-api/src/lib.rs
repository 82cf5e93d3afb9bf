//! JSON REST API for contact-form submissions.
//!
//! Exposes an axum [`Router`] backed by any
//! [`contactform_core::store::SubmissionStore`]. Handlers open their own
//! `tracing` spans and log storage failures inside them; installing a
//! subscriber, HTTP request tracing, and TLS are left to the caller.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", contactform_api::api_router(store.clone()))
//! ```

pub mod contacts;
pub mod error;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, put},
};
use contactform_core::store::SubmissionStore;

pub use contacts::ContactResponse;
pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: SubmissionStore + 'static,
{
  Router::new()
    .route("/contacts", get(contacts::list::<S>).post(contacts::create::<S>))
    .route("/contacts/{id}", get(contacts::get_one::<S>))
    .route("/contacts/{id}/mark-read", put(contacts::mark_read::<S>))
    .with_state(store)
}
