use std::sync::{PoisonError, RwLock};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Gravatar query parameters: size, rating and default image.
/// Kept as strings and passed through unvalidated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GravatarConfig {
    pub s: String,
    pub r: String,
    pub d: String,
}

impl Default for GravatarConfig {
    fn default() -> Self {
        Self {
            s: "100".to_string(),
            r: "pg".to_string(),
            d: "mm".to_string(),
        }
    }
}

/// Formatting configuration shared by every helper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default moment-style format used by `get_formatted_date`.
    pub date_format: String,
    pub gravatar: GravatarConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            date_format: "MMMM YYYY".to_string(),
            gravatar: GravatarConfig::default(),
        }
    }
}

/// Partial Gravatar override; `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GravatarOptions {
    pub s: Option<String>,
    pub r: Option<String>,
    pub d: Option<String>,
}

/// Partial configuration override accepted by `set_config`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigOptions {
    pub date_format: Option<String>,
    pub gravatar: Option<GravatarOptions>,
}

impl ConfigOptions {
    pub fn date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = Some(format.into());
        self
    }

    pub fn gravatar(mut self, gravatar: GravatarOptions) -> Self {
        self.gravatar = Some(gravatar);
        self
    }
}

impl Config {
    /// Returns a copy of `self` with every field present in `opts` replaced.
    pub fn merged(&self, opts: &ConfigOptions) -> Config {
        let mut next = self.clone();
        if let Some(format) = &opts.date_format {
            next.date_format = format.clone();
        }
        if let Some(gravatar) = &opts.gravatar {
            if let Some(s) = &gravatar.s {
                next.gravatar.s = s.clone();
            }
            if let Some(r) = &gravatar.r {
                next.gravatar.r = r.clone();
            }
            if let Some(d) = &gravatar.d {
                next.gravatar.d = d.clone();
            }
        }
        next
    }
}

// Written only through set_config/reset_config. Concurrent writers are
// last-writer-wins; readers always see a complete Config.
static CONFIG: Lazy<RwLock<Config>> = Lazy::new(|| RwLock::new(Config::default()));

/// Merges `opts` into the process-wide configuration. `None` is a no-op.
pub fn set_config(opts: Option<&ConfigOptions>) {
    let Some(opts) = opts else {
        return;
    };
    let mut guard = CONFIG.write().unwrap_or_else(PoisonError::into_inner);
    *guard = guard.merged(opts);
    debug!(
        date_format = %guard.date_format,
        gravatar = ?guard.gravatar,
        "theme utils config updated"
    );
}

/// Snapshot of the process-wide configuration.
pub fn current_config() -> Config {
    CONFIG
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Restores the default configuration.
pub fn reset_config() {
    *CONFIG.write().unwrap_or_else(PoisonError::into_inner) = Config::default();
    debug!("theme utils config reset to defaults");
}
