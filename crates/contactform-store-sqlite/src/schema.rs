//! SQL schema for the contact-form SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- AUTOINCREMENT so ids of the highest row are never handed out again.
-- length() counts characters for TEXT values.
CREATE TABLE IF NOT EXISTS contacts (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    name        TEXT    NOT NULL CHECK (length(name)    BETWEEN 1 AND 100),
    email       TEXT    NOT NULL CHECK (length(email)   BETWEEN 1 AND 150),
    subject     TEXT    NOT NULL CHECK (length(subject) BETWEEN 1 AND 200),
    message     TEXT    NOT NULL CHECK (length(message) BETWEEN 1 AND 1000),
    created_at  TEXT    NOT NULL,   -- RFC 3339 UTC, fixed width; server-assigned
    is_read     INTEGER NOT NULL DEFAULT 0 CHECK (is_read IN (0, 1))
);

CREATE INDEX IF NOT EXISTS contacts_created_idx ON contacts(created_at);

PRAGMA user_version = 1;
";
