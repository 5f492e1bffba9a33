use chrono::{NaiveDateTime, Utc};

use crate::config::{current_config, Config, ConfigOptions};
use crate::dates::{format_date, parse_date, Duration, DurationOutput};
use crate::errors::Result;
use crate::lookup;
use crate::models::{Language, Profile, Resume};
use crate::picture;

/// Helper set bound to an owned `Config`.
///
/// The crate-level functions use a snapshot of the process-wide config;
/// build one of these directly when a theme wants its own settings without
/// touching global state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeUtils {
    config: Config,
}

impl ThemeUtils {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Snapshot of the process-wide configuration.
    pub fn from_global() -> Self {
        Self::new(current_config())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns a copy with `opts` merged into its config.
    pub fn with_options(&self, opts: &ConfigOptions) -> Self {
        Self::new(self.config.merged(opts))
    }

    pub fn get_url_for_picture(&self, resume: &Resume) -> Option<String> {
        picture::url_for_picture(resume, &self.config.gravatar)
    }

    pub fn get_profile<'a>(&self, resume: &'a Resume, network: &str) -> Option<&'a Profile> {
        lookup::get_profile(resume, network)
    }

    pub fn get_url_for_profile<'a>(&self, resume: &'a Resume, network: &str) -> Option<&'a str> {
        lookup::get_url_for_profile(resume, network)
    }

    pub fn get_native_language<'a>(&self, resume: &'a Resume) -> Option<&'a Language> {
        lookup::get_native_language(resume)
    }

    /// Formats `date` with `date_format`, or the configured default.
    pub fn get_formatted_date(&self, date: &str, date_format: Option<&str>) -> Result<String> {
        let parsed = parse_date(date)?;
        Ok(format_date(
            &parsed,
            date_format.unwrap_or(&self.config.date_format),
        ))
    }

    /// Span from `start_date` to `end_date`; an empty or absent end means now (UTC).
    pub fn get_duration(
        &self,
        start_date: &str,
        end_date: Option<&str>,
        humanize: bool,
    ) -> Result<DurationOutput> {
        self.get_duration_at(start_date, end_date, humanize, Utc::now().naive_utc())
    }

    /// Like `get_duration` with an explicit "now" for open-ended spans.
    pub fn get_duration_at(
        &self,
        start_date: &str,
        end_date: Option<&str>,
        humanize: bool,
        now: NaiveDateTime,
    ) -> Result<DurationOutput> {
        let start = parse_date(start_date)?;
        let end = match end_date.map(str::trim) {
            Some(end) if !end.is_empty() => parse_date(end)?,
            _ => now,
        };
        let duration = Duration::between(start, end);
        Ok(if humanize {
            DurationOutput::Humanized(duration.humanize())
        } else {
            DurationOutput::Structured(duration)
        })
    }
}
