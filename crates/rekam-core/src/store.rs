//! The `RecordStore` trait.
//!
//! Implemented by storage backends (e.g. `rekam-store-sqlite`). The HTTP
//! layer depends on this abstraction, not on any concrete backend.

use std::future::Future;

use crate::record::{NewRecord, Record};

/// Abstraction over a Rekam record store backend.
///
/// Records are append-and-delete only: no operation ever mutates an existing
/// row. All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait RecordStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Persist `record` and return the newly assigned id.
  fn insert(
    &self,
    record: NewRecord,
  ) -> impl Future<Output = Result<i64, Self::Error>> + Send + '_;

  /// Return every record, most recent (highest id) first.
  ///
  /// Each call is a fresh full scan; the result is a finite snapshot, not a
  /// restartable cursor.
  fn list_all(
    &self,
  ) -> impl Future<Output = Result<Vec<Record>, Self::Error>> + Send + '_;

  /// Delete at most one row. Returns `true` iff a row was removed, so the
  /// caller can distinguish "not found" from success.
  fn delete_by_id(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  /// Delete every row unconditionally.
  fn delete_all(
    &self,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;
}
