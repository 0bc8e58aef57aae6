//! Submission timestamp formatting.
//!
//! The offset is an explicit configuration value rather than the ambient
//! process locale, and the format is a fixed constant.

use chrono::{DateTime, FixedOffset, Utc};

/// strftime pattern for submission timestamps: `DD/MM/YYYY, HH:MM:SS`.
pub const SUBMISSION_FORMAT: &str = "%d/%m/%Y, %H:%M:%S";

/// Format `instant` in `offset` using [`SUBMISSION_FORMAT`].
pub fn format_submission(instant: DateTime<Utc>, offset: FixedOffset) -> String {
  instant
    .with_timezone(&offset)
    .format(SUBMISSION_FORMAT)
    .to_string()
}

/// Capture the current instant as a submission timestamp in `offset`.
pub fn submission_now(offset: FixedOffset) -> String {
  format_submission(Utc::now(), offset)
}

#[cfg(test)]
mod tests {
  use chrono::TimeZone as _;

  use super::*;

  #[test]
  fn formats_day_first_with_comma_separator() {
    let instant = Utc.with_ymd_and_hms(2026, 8, 1, 2, 30, 5).unwrap();
    let utc = "+00:00".parse().unwrap();
    assert_eq!(format_submission(instant, utc), "01/08/2026, 02:30:05");
  }

  #[test]
  fn offset_shifts_the_wall_clock() {
    let instant = Utc.with_ymd_and_hms(2026, 8, 1, 22, 0, 0).unwrap();
    let wib = "+07:00".parse().unwrap();
    // 22:00 UTC is already the next day in UTC+7.
    assert_eq!(format_submission(instant, wib), "02/08/2026, 05:00:00");
  }
}
