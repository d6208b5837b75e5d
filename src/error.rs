//! Unified error types for chatstat.
//!
//! This module provides a single [`ChatstatError`] enum that covers all error
//! cases in the library, plus [`DateTimeParseError`] for the transcript
//! timestamp resolver.
//!
//! # Error Handling Philosophy
//!
//! - **Malformed lines** are not errors: the parser drops them and counts them
//! - **Unparseable timestamps** surface as [`DateTimeParseError`]; the
//!   aggregator either skips them or aborts, depending on
//!   [`InvalidDateTimePolicy`](crate::config::InvalidDateTimePolicy)
//! - **Everything else** (I/O, bad filter dates, report writers) is a
//!   [`ChatstatError`]

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for chatstat operations.
///
/// # Example
///
/// ```rust
/// use chatstat::error::Result;
/// use chatstat::Message;
///
/// fn my_function() -> Result<Vec<Message>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatstatError>;

/// The error type for all chatstat operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatstatError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The transcript file doesn't exist
    /// - Permission denied
    /// - Disk is full (when writing a report)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A message timestamp could not be resolved.
    ///
    /// Only returned when aggregation runs with the abort policy.
    #[error("Invalid message timestamp: {0}")]
    DateTime(#[from] DateTimeParseError),

    /// Invalid date format in filter configuration.
    ///
    /// Date filters expect YYYY-MM-DD format.
    #[error("Invalid date '{input}'. Expected format: {expected}")]
    InvalidDate {
        /// The invalid date string that was provided
        input: String,
        /// Expected format description
        expected: &'static str,
    },

    /// An unknown or unsupported report format was requested.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// The kind of format that was expected
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// UTF-8 encoding error.
    ///
    /// Occurs when a rendered report buffer is not valid UTF-8.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },
}

/// Reasons a transcript timestamp such as `"05/08/21, 14:31"` failed to resolve.
///
/// Every variant carries the offending input text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateTimeParseError {
    /// The `", "` separator between date and time is missing.
    #[error("missing ', ' between date and time in '{0}'")]
    MissingSeparator(String),

    /// The date part is not `DD/MM/YY` or `DD/MM/YYYY`.
    #[error("malformed date in '{0}'")]
    InvalidDate(String),

    /// The time part is not `HH:MM`, optionally followed by `AM`/`PM`.
    #[error("malformed time in '{0}'")]
    InvalidTime(String),

    /// All fields parsed but do not form a real calendar instant.
    #[error("date or time out of range in '{0}'")]
    OutOfRange(String),
}

impl DateTimeParseError {
    /// Returns the text that failed to resolve.
    pub fn input(&self) -> &str {
        match self {
            DateTimeParseError::MissingSeparator(s)
            | DateTimeParseError::InvalidDate(s)
            | DateTimeParseError::InvalidTime(s)
            | DateTimeParseError::OutOfRange(s) => s,
        }
    }
}

impl From<std::string::FromUtf8Error> for ChatstatError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatstatError::Utf8 {
            context: "report rendering".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatstatError {
    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ChatstatError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Creates an invalid date error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        ChatstatError::InvalidDate {
            input: input.into(),
            expected: "YYYY-MM-DD",
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatstatError::Io(_))
    }

    /// Returns `true` if this is a timestamp resolution error.
    pub fn is_datetime(&self) -> bool {
        matches!(self, ChatstatError::DateTime(_))
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ChatstatError::InvalidFormat { .. })
    }

    /// Returns `true` if this is a date-related error.
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, ChatstatError::InvalidDate { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================
