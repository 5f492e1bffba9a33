//! Calendar-aware elapsed time between two resume dates.

use std::fmt;

use chrono::{Datelike, Months, NaiveDateTime};

const MS_PER_SECOND: i64 = 1_000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;
/// Average Gregorian month: 146097 days / 4800 months.
const AVG_MONTH_MS: f64 = 30.436_875 * MS_PER_DAY as f64;

/// Elapsed time split into calendar components.
///
/// Whole months are counted on the calendar (adding months to the start date,
/// clamped to month end); the rest is exact time. When the end precedes the
/// start, every accessor returns a negative value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Duration {
    negative: bool,
    total_months: i64,
    remainder_ms: i64,
    total_ms: i64,
}

impl Duration {
    pub fn between(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        let (from, to, negative) = if end < start {
            (end, start, true)
        } else {
            (start, end, false)
        };

        let mut total_months = i64::from(to.year() - from.year()) * 12
            + i64::from(to.month())
            - i64::from(from.month());
        let mut anchor = add_months(from, total_months, to);
        while total_months > 0 && anchor > to {
            total_months -= 1;
            anchor = add_months(from, total_months, to);
        }

        Self {
            negative,
            total_months,
            remainder_ms: (to - anchor).num_milliseconds(),
            total_ms: (to - from).num_milliseconds(),
        }
    }

    fn sign(&self) -> i64 {
        if self.negative {
            -1
        } else {
            1
        }
    }

    pub fn is_negative(&self) -> bool {
        self.negative && self.total_ms != 0
    }

    pub fn years(&self) -> i64 {
        self.sign() * (self.total_months / 12)
    }

    pub fn months(&self) -> i64 {
        self.sign() * (self.total_months % 12)
    }

    pub fn days(&self) -> i64 {
        self.sign() * (self.remainder_ms / MS_PER_DAY)
    }

    pub fn hours(&self) -> i64 {
        self.sign() * (self.remainder_ms % MS_PER_DAY / MS_PER_HOUR)
    }

    pub fn minutes(&self) -> i64 {
        self.sign() * (self.remainder_ms % MS_PER_HOUR / MS_PER_MINUTE)
    }

    pub fn seconds(&self) -> i64 {
        self.sign() * (self.remainder_ms % MS_PER_MINUTE / MS_PER_SECOND)
    }

    pub fn milliseconds(&self) -> i64 {
        self.sign() * (self.remainder_ms % MS_PER_SECOND)
    }

    pub fn as_years(&self) -> f64 {
        self.as_months() / 12.0
    }

    /// Whole calendar months plus the remainder over an average month.
    pub fn as_months(&self) -> f64 {
        self.sign() as f64 * (self.total_months as f64 + self.remainder_ms as f64 / AVG_MONTH_MS)
    }

    pub fn as_days(&self) -> f64 {
        self.as_milliseconds() / MS_PER_DAY as f64
    }

    pub fn as_hours(&self) -> f64 {
        self.as_milliseconds() / MS_PER_HOUR as f64
    }

    pub fn as_minutes(&self) -> f64 {
        self.as_milliseconds() / MS_PER_MINUTE as f64
    }

    pub fn as_seconds(&self) -> f64 {
        self.as_milliseconds() / MS_PER_SECOND as f64
    }

    pub fn as_milliseconds(&self) -> f64 {
        (self.sign() * self.total_ms) as f64
    }

    /// Natural-language length ("a few seconds", "3 days", "2 years").
    ///
    /// Uses moment.js thresholds on rounded totals and ignores the sign:
    /// up to 44 seconds, 45 minutes, 22 hours, 26 days and 11 months a unit
    /// is reported in itself; past that the next larger unit takes over.
    pub fn humanize(&self) -> String {
        let ms = self.total_ms as f64;
        let seconds = (ms / MS_PER_SECOND as f64).round() as i64;
        let minutes = (ms / MS_PER_MINUTE as f64).round() as i64;
        let hours = (ms / MS_PER_HOUR as f64).round() as i64;
        let days = (ms / MS_PER_DAY as f64).round() as i64;
        let months = self.as_months().abs().round() as i64;
        let years = self.as_years().abs().round() as i64;

        match () {
            _ if seconds <= 44 => "a few seconds".to_string(),
            _ if minutes <= 1 => "a minute".to_string(),
            _ if minutes < 45 => format!("{minutes} minutes"),
            _ if hours <= 1 => "an hour".to_string(),
            _ if hours < 22 => format!("{hours} hours"),
            _ if days <= 1 => "a day".to_string(),
            _ if days < 26 => format!("{days} days"),
            _ if months <= 1 => "a month".to_string(),
            _ if months < 11 => format!("{months} months"),
            _ if years <= 1 => "a year".to_string(),
            _ => format!("{years} years"),
        }
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.humanize())
    }
}

// Month addition only overflows at the edge of chrono's range, where `to`
// is the closest representable bound.
fn add_months(from: NaiveDateTime, months: i64, to: NaiveDateTime) -> NaiveDateTime {
    u32::try_from(months)
        .ok()
        .and_then(|m| from.checked_add_months(Months::new(m)))
        .unwrap_or(to)
}

/// Result of `get_duration`: the structured span, or its humanized text.
#[derive(Debug, Clone, PartialEq)]
pub enum DurationOutput {
    Structured(Duration),
    Humanized(String),
}

impl DurationOutput {
    pub fn as_duration(&self) -> Option<&Duration> {
        match self {
            DurationOutput::Structured(duration) => Some(duration),
            DurationOutput::Humanized(_) => None,
        }
    }

    pub fn as_humanized(&self) -> Option<&str> {
        match self {
            DurationOutput::Structured(_) => None,
            DurationOutput::Humanized(text) => Some(text),
        }
    }
}

impl fmt::Display for DurationOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DurationOutput::Structured(duration) => fmt::Display::fmt(duration, f),
            DurationOutput::Humanized(text) => f.write_str(text),
        }
    }
}
