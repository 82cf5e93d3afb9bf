//! [`SqliteStore`] — the SQLite implementation of [`SubmissionStore`].

use std::path::Path;

use chrono::Utc;
use rusqlite::OptionalExtension as _;

use contactform_core::{
  NewSubmission, Submission, SubmissionId, store::SubmissionStore,
};

use crate::{
  Result,
  encode::{RawSubmission, SUBMISSION_COLUMNS, encode_dt},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A submission store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  pub(crate) conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) the database file at `path`.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    Self::with_connection(tokio_rusqlite::Connection::open(path).await?).await
  }

  /// Open a private in-memory database, gone when the store is dropped.
  pub async fn open_in_memory() -> Result<Self> {
    Self::with_connection(tokio_rusqlite::Connection::open_in_memory().await?)
      .await
  }

  async fn with_connection(conn: tokio_rusqlite::Connection) -> Result<Self> {
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Create the `contacts` table if it is missing. Safe to rerun.
  pub(crate) async fn init_schema(&self) -> Result<()> {
    Ok(self.conn.call(|conn| Ok(conn.execute_batch(SCHEMA)?)).await?)
  }
}

// ─── SubmissionStore impl ────────────────────────────────────────────────────

impl SubmissionStore for SqliteStore {
  type Error = crate::Error;

  async fn insert(&self, submission: NewSubmission) -> Result<SubmissionId> {
    let name    = submission.name().to_owned();
    let email   = submission.email().to_owned();
    let subject = submission.subject().to_owned();
    let message = submission.message().to_owned();
    let at_str  = encode_dt(Utc::now());

    let id = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO contacts (name, email, subject, message, created_at, is_read)
           VALUES (?1, ?2, ?3, ?4, ?5, 0)",
          rusqlite::params![name, email, subject, message, at_str],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    Ok(id)
  }

  async fn list_all(&self) -> Result<Vec<Submission>> {
    let raws: Vec<RawSubmission> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {SUBMISSION_COLUMNS} FROM contacts
           ORDER BY created_at DESC, id DESC"
        ))?;
        let rows = stmt
          .query_map([], RawSubmission::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawSubmission::into_submission).collect()
  }

  async fn find_by_id(&self, id: SubmissionId) -> Result<Option<Submission>> {
    let raw: Option<RawSubmission> = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            &format!("SELECT {SUBMISSION_COLUMNS} FROM contacts WHERE id = ?1"),
            rusqlite::params![id],
            RawSubmission::from_row,
          )
          .optional()?)
      })
      .await?;

    raw.map(RawSubmission::into_submission).transpose()
  }

  async fn mark_read(&self, id: SubmissionId) -> Result<bool> {
    // SQLite counts every row matched by the WHERE clause, including rows
    // whose value did not change, so an already-read row still reports 1.
    let changed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "UPDATE contacts SET is_read = 1 WHERE id = ?1",
          rusqlite::params![id],
        )?)
      })
      .await?;

    Ok(changed > 0)
  }
}
