//! Helpers for JSON Resume themes.
//!
//! Resolves picture URLs (falling back to Gravatar), looks up social
//! profiles and the native language, formats dates with moment-style
//! patterns and computes employment durations. Every helper only reads the
//! resume it is given.
//!
//! The free functions read a process-wide [`Config`] changed through
//! [`set_config`]. The config sits behind a lock but the helpers make no
//! ordering promise between concurrent writers and readers; themes that need
//! isolated settings should hold a [`ThemeUtils`] instead.

pub mod config;
pub mod dates;
pub mod errors;
pub mod lookup;
pub mod models;
pub mod picture;
mod theme;

use chrono::NaiveDateTime;

pub use config::{
    current_config, reset_config, set_config, Config, ConfigOptions, GravatarConfig,
    GravatarOptions,
};
pub use dates::{Duration, DurationOutput};
pub use errors::{Result, ThemeUtilsError};
pub use lookup::{get_native_language, get_profile, get_url_for_profile, NATIVE_FLUENCY};
pub use models::*;
pub use theme::ThemeUtils;

/// Picture URL for the resume: `basics.picture` (or the newer `basics.image`)
/// verbatim when non-empty, whitespace included; otherwise a Gravatar URL built
/// from `basics.email` and the configured parameters. `None` if neither is set.
pub fn get_url_for_picture(resume: &Resume) -> Option<String> {
    ThemeUtils::from_global().get_url_for_picture(resume)
}

/// Formats a `YYYY-MM-DD` (or partial/ISO) date with `date_format`, falling
/// back to the configured default.
///
/// # Errors
/// `ThemeUtilsError::InvalidDate` when `date` cannot be parsed.
pub fn get_formatted_date(date: &str, date_format: Option<&str>) -> Result<String> {
    ThemeUtils::from_global().get_formatted_date(date, date_format)
}

/// Elapsed time from `start_date` to `end_date`, or to now when the end is
/// empty or absent.
///
/// # Errors
/// `ThemeUtilsError::InvalidDate` when either date cannot be parsed.
pub fn get_duration(
    start_date: &str,
    end_date: Option<&str>,
    humanize: bool,
) -> Result<DurationOutput> {
    ThemeUtils::from_global().get_duration(start_date, end_date, humanize)
}

/// [`get_duration`] against an explicit "now".
pub fn get_duration_at(
    start_date: &str,
    end_date: Option<&str>,
    humanize: bool,
    now: NaiveDateTime,
) -> Result<DurationOutput> {
    ThemeUtils::from_global().get_duration_at(start_date, end_date, humanize, now)
}
