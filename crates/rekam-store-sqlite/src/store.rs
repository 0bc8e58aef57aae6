//! [`SqliteStore`] — the SQLite implementation of [`RecordStore`].

use std::path::Path;

use rekam_core::{
  record::{NewRecord, Record},
  store::RecordStore,
};

use crate::{Error, Result, schema::SCHEMA};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A record store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted. Every
/// operation is a single bound-parameter statement sent through the
/// connection's command channel, so concurrent writers queue rather than
/// interleave.
#[derive(Clone)]
pub struct SqliteStore {
  pub(crate) conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  pub(crate) async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── RecordStore impl ────────────────────────────────────────────────────────

impl RecordStore for SqliteStore {
  type Error = Error;

  async fn insert(&self, record: NewRecord) -> Result<i64> {
    let id = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO history (timestamp, name, score, max_score, category, note)
           VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
          rusqlite::params![
            record.timestamp,
            record.name,
            record.score,
            record.max_score,
            record.category,
            record.note,
          ],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;
    Ok(id)
  }

  async fn list_all(&self) -> Result<Vec<Record>> {
    let records = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT id, timestamp, name, score, max_score, category, note
           FROM history ORDER BY id DESC",
        )?;
        let rows = stmt
          .query_map([], |row| {
            Ok(Record {
              id:        row.get(0)?,
              timestamp: row.get(1)?,
              name:      row.get::<_, Option<String>>(2)?.unwrap_or_default(),
              score:     row.get(3)?,
              max_score: row.get(4)?,
              category:  row.get(5)?,
              note:      row.get::<_, Option<String>>(6)?.unwrap_or_default(),
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(records)
  }

  async fn delete_by_id(&self, id: i64) -> Result<bool> {
    let affected = self
      .conn
      .call(move |conn| {
        Ok(conn.execute("DELETE FROM history WHERE id = ?1", rusqlite::params![id])?)
      })
      .await?;
    Ok(affected > 0)
  }

  async fn delete_all(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute("DELETE FROM history", [])?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}
