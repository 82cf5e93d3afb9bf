//! HTTP front door for the contact-form API.
//!
//! Loads layered configuration, and wraps the API router with request tracing
//! and panic recovery.

use std::{
  any::Any,
  path::{Path, PathBuf},
  sync::Arc,
};

use axum::{
  Router,
  response::{IntoResponse, Response},
};
use contactform_api::ApiError;
use contactform_core::store::SubmissionStore;
use serde::Deserialize;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

/// Prefix for environment variable overrides, e.g. `CONTACTFORM_PORT`.
pub const ENV_PREFIX: &str = "CONTACTFORM";

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  pub host:       String,
  pub port:       u16,
  pub store_path: PathBuf,
  /// Path the API routes are nested under.
  pub api_prefix: String,
}

/// Read configuration from built-in defaults, then `path` if it exists, then
/// `CONTACTFORM_*` environment variables.
pub fn load_config(path: &Path) -> Result<ServerConfig, config::ConfigError> {
  config::Config::builder()
    .set_default("host", "127.0.0.1")?
    .set_default("port", 8080)?
    .set_default("store_path", "contacts.db")?
    .set_default("api_prefix", "/api")?
    .add_source(config::File::from(path.to_path_buf()).required(false))
    .add_source(config::Environment::with_prefix(ENV_PREFIX))
    .build()?
    .try_deserialize()
}

/// Resolve a `store_path` whose first component is `~` against `$HOME`.
/// Left untouched when `HOME` is unset.
pub fn expand_tilde(path: &Path) -> PathBuf {
  match (path.strip_prefix("~"), std::env::var_os("HOME")) {
    (Ok(rest), Some(home)) => Path::new(&home).join(rest),
    _ => path.to_path_buf(),
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the complete application: API routes under `api_prefix`, plus
/// tracing and panic recovery.
pub fn app<S>(store: Arc<S>, api_prefix: &str) -> Router
where
  S: SubmissionStore + 'static,
{
  let api = contactform_api::api_router(store);
  let prefix = api_prefix.trim_matches('/');

  // axum refuses to nest at the root.
  let routes = if prefix.is_empty() {
    Router::new().merge(api)
  } else {
    Router::new().nest(&format!("/{prefix}"), api)
  };

  with_layers(routes)
}

/// Wrap `router` with request tracing and panic recovery.
pub fn with_layers(router: Router) -> Router {
  router
    .layer(CatchPanicLayer::custom(panic_response))
    .layer(TraceLayer::new_for_http())
}

fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
  let detail = if let Some(s) = panic.downcast_ref::<String>() {
    s.clone()
  } else if let Some(s) = panic.downcast_ref::<&str>() {
    (*s).to_owned()
  } else {
    "handler panicked".to_owned()
  };
  ApiError::Unexpected(detail).into_response()
}
