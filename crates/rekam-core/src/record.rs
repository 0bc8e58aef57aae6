//! Record — one persisted quiz submission.
//!
//! A record is immutable once created. The store supports no in-place
//! updates; the only mutations are whole-row deletions.

use serde::{Deserialize, Serialize};

/// A persisted submission row, as returned by the store and the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
  /// Store-assigned rowid; unique and strictly increasing in insertion
  /// order. The only lookup and delete key.
  pub id:        i64,
  /// Submission instant, pre-formatted with
  /// [`SUBMISSION_FORMAT`](crate::timestamp::SUBMISSION_FORMAT) in the
  /// configured offset.
  pub timestamp: String,
  /// Display name; empty when the client supplied none.
  pub name:      String,
  /// Raw achieved score. The store does not validate its range.
  pub score:     i64,
  /// Maximum attainable score for the quiz instance that produced this row.
  pub max_score: i64,
  /// Category label chosen by the submitting client. Never recomputed.
  pub category:  String,
  /// Free-text note; `NULL` in storage is normalised to an empty string.
  pub note:      String,
}

/// Input for [`RecordStore::insert`](crate::store::RecordStore::insert) —
/// a [`Record`] minus the store-assigned fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecord {
  pub timestamp: String,
  pub name:      String,
  pub score:     i64,
  pub max_score: i64,
  pub category:  String,
  pub note:      String,
}
