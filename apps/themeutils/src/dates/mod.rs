//! Date parsing, moment-style formatting and elapsed-time computation.

pub mod duration;
pub mod format;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::errors::{Result, ThemeUtilsError};

pub use duration::{Duration, DurationOutput};
pub use format::format_date;

/// Parses a resume date.
///
/// Accepts `YYYY-MM-DD`, the partial forms `YYYY-MM` and `YYYY` (missing parts
/// default to 1), naive ISO timestamps and RFC 3339 timestamps, which are
/// converted to UTC. Anything else is `ThemeUtilsError::InvalidDate`.
pub fn parse_date(input: &str) -> Result<NaiveDateTime> {
    let trimmed = input.trim();
    let invalid = || ThemeUtilsError::InvalidDate(input.to_string());

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.naive_utc());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(dt);
    }

    let date = match trimmed.split('-').collect::<Vec<_>>().as_slice() {
        [year] => ymd(year, "1", "1"),
        [year, month] => ymd(year, month, "1"),
        [year, month, day] => ymd(year, month, day),
        _ => None,
    }
    .ok_or_else(invalid)?;

    date.and_hms_opt(0, 0, 0).ok_or_else(invalid)
}

fn ymd(year: &str, month: &str, day: &str) -> Option<NaiveDate> {
    if year.len() != 4 || month.is_empty() || month.len() > 2 || day.is_empty() || day.len() > 2 {
        return None;
    }
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if !(all_digits(year) && all_digits(month) && all_digits(day)) {
        return None;
    }
    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, day.parse().ok()?)
}
