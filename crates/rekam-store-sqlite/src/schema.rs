//! SQL schema for the Rekam SQLite store.
//!
//! Executed on every open via `execute_batch`; idempotent thanks to
//! `CREATE TABLE IF NOT EXISTS`, so a restart never touches existing rows.
//! Future migrations will be gated on `PRAGMA user_version`.

/// Full schema DDL.
///
/// `created_at` is written by the database and never read back by the API.
/// Reads are full scans ordered by `id`; the table carries no secondary
/// indices and no foreign keys.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS history (
    id         INTEGER PRIMARY KEY AUTOINCREMENT,
    timestamp  TEXT NOT NULL,
    name       TEXT,
    score      INTEGER NOT NULL,
    max_score  INTEGER NOT NULL,
    category   TEXT NOT NULL,
    note       TEXT,
    created_at DATETIME DEFAULT CURRENT_TIMESTAMP
);

PRAGMA user_version = 1;
";
