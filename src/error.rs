//! Error types.
//!
//! Two failure families exist:
//! - [`ParseError`]: a clock string that does not match `HH:MM`.
//! - [`TimetableError`]: everything surfaced to a caller (empty request,
//!   bad catalog data, I/O and configuration failures).
//!
//! Unknown course codes and malformed avoid rules are *not* errors; they
//! are reported through [`CodeResolution`](crate::catalog::CodeResolution)
//! and [`AvoidRuleParse`](crate::models::AvoidRuleParse).

use thiserror::Error;

use crate::validation::ValidationError;

/// Result alias for fallible timetable operations.
pub type Result<T> = std::result::Result<T, TimetableError>;

/// A clock string could not be turned into minutes since midnight.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Input does not have the `HH:MM` shape.
    #[error("invalid clock time '{input}': expected HH:MM")]
    InvalidClockTime { input: String },
    /// Hour outside 0..=23.
    #[error("hour out of range in '{input}'")]
    HourOutOfRange { input: String },
    /// Minute outside 0..=59.
    #[error("minute out of range in '{input}'")]
    MinuteOutOfRange { input: String },
    /// Unknown day symbol.
    #[error("unknown day '{input}'")]
    InvalidDay { input: String },
}

/// Errors surfaced by the planner.
#[derive(Debug, Error)]
pub enum TimetableError {
    /// None of the requested codes exist in the catalog.
    #[error("No valid courses")]
    NoValidCourses,

    /// A catalog slot carries a malformed time.
    #[error("course '{course}': {source}")]
    Parse {
        course: String,
        #[source]
        source: ParseError,
    },

    /// Catalog data failed integrity checks.
    #[error("invalid catalog: {}", summarize(.0))]
    InvalidCatalog(Vec<ValidationError>),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(#[from] toml::de::Error),
}

impl TimetableError {
    /// Whether the caller supplied bad input (maps to a 400-class response).
    pub fn is_client_error(&self) -> bool {
        matches!(self, TimetableError::NoValidCourses)
    }
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
