//! Error types for `rekam-core`.
//!
//! These cover scorer input failures only. An out-of-range *classification*
//! is not an error — [`classify`](crate::classify::classify) reports it as
//! the [`Error`](crate::classify::Category::Error) category instead.

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  /// The scorer received a response sequence of the wrong length.
  #[error("expected {expected} responses, got {got}")]
  ResponseCount { expected: usize, got: usize },

  /// A single response value fell outside the allowed range.
  #[error("response {index} has value {value}, allowed range is 0..={max}")]
  ResponseValue { index: usize, value: i64, max: i64 },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
