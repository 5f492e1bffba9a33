use thiserror::Error;

/// Library-level error type.
/// Lookups never fail; only parsing (dates, documents) surfaces an error.
#[derive(Debug, Error)]
pub enum ThemeUtilsError {
    #[error("Invalid date: {0:?} (expected YYYY, YYYY-MM, YYYY-MM-DD or an ISO 8601 timestamp)")]
    InvalidDate(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = ThemeUtilsError> = std::result::Result<T, E>;
