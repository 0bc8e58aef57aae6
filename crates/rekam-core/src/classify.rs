//! Score classification and the 10-item screening scorer.
//!
//! Both functions are pure and deterministic. Ties at a threshold resolve to
//! the lower (calmer) category.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

// ─── Category ────────────────────────────────────────────────────────────────

/// Outcome of classifying a total against a maximum score.
///
/// Serialises to and displays as the exact labels the front-end shows, so
/// the enum can go straight onto the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
  #[serde(rename = "Baik")]
  Baik,
  #[serde(rename = "Perlu Perhatian Ringan")]
  PerluPerhatianRingan,
  #[serde(rename = "Disarankan Konsultasi")]
  DisarankanKonsultasi,
  /// Sentinel for an out-of-range total. Not a Rust error.
  #[serde(rename = "Error")]
  Error,
}

impl Category {
  pub fn as_str(self) -> &'static str {
    match self {
      Category::Baik => "Baik",
      Category::PerluPerhatianRingan => "Perlu Perhatian Ringan",
      Category::DisarankanKonsultasi => "Disarankan Konsultasi",
      Category::Error => "Error",
    }
  }
}

impl fmt::Display for Category {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

// ─── Classifier ──────────────────────────────────────────────────────────────

/// Map a raw total to a [`Category`].
///
/// Thresholds are `t1 = floor(max_score * 0.33)` and
/// `t2 = floor(max_score * 0.66)`; a total at exactly `t1` or `t2` falls
/// into the lower category. A total outside `0..=max_score` classifies to
/// [`Category::Error`].
pub fn classify(total: i64, max_score: i64) -> Category {
  if total < 0 || total > max_score {
    return Category::Error;
  }

  let t1 = (max_score as f64 * 0.33) as i64;
  let t2 = (max_score as f64 * 0.66) as i64;

  if total <= t1 {
    Category::Baik
  } else if total <= t2 {
    Category::PerluPerhatianRingan
  } else {
    Category::DisarankanKonsultasi
  }
}

// ─── Scorer ──────────────────────────────────────────────────────────────────

/// Number of items in the screening instrument.
pub const RESPONSE_COUNT: usize = 10;

/// Highest value a single response may take.
pub const RESPONSE_MAX: i64 = 3;

/// Maximum attainable total for the full instrument.
pub const INSTRUMENT_MAX_SCORE: i64 = RESPONSE_COUNT as i64 * RESPONSE_MAX;

/// Zero-based item positions that are reverse-scored as `3 - value`.
const REVERSE_POSITIONS: [usize; 2] = [4, 8];

/// Sum a full response sequence into a raw total.
///
/// Requires exactly [`RESPONSE_COUNT`] responses, each in
/// `0..=`[`RESPONSE_MAX`]. Items at the reverse-scored positions contribute
/// `RESPONSE_MAX - value` instead of `value`. Input failures are reported as
/// [`Error`] variants, distinct from classification failure.
pub fn score_responses(responses: &[i64]) -> Result<i64> {
  if responses.len() != RESPONSE_COUNT {
    return Err(Error::ResponseCount {
      expected: RESPONSE_COUNT,
      got:      responses.len(),
    });
  }

  let mut total = 0;
  for (index, &value) in responses.iter().enumerate() {
    if !(0..=RESPONSE_MAX).contains(&value) {
      return Err(Error::ResponseValue { index, value, max: RESPONSE_MAX });
    }
    total += if REVERSE_POSITIONS.contains(&index) {
      RESPONSE_MAX - value
    } else {
      value
    };
  }

  Ok(total)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
