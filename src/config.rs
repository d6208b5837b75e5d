//! Configuration types for parsing and aggregation.
//!
//! This module provides plain configuration structs for library usage,
//! without any CLI framework dependencies.
//!
//! - [`TranscriptConfig`] - how transcript lines are classified and read
//! - [`StatsConfig`] - how statistics are aggregated
//!
//! # Example
//!
//! ```rust
//! use chatstat::config::{HeaderPattern, InvalidDateTimePolicy, StatsConfig, TranscriptConfig};
//! use chatstat::parser::TranscriptParser;
//!
//! let parser = TranscriptParser::with_config(
//!     TranscriptConfig::new().with_header_pattern(HeaderPattern::Legacy),
//! );
//!
//! let stats_config = StatsConfig::new()
//!     .with_top_days(5)
//!     .with_invalid_datetime(InvalidDateTimePolicy::Abort);
//! ```

use serde::{Deserialize, Serialize};

use crate::message::MEDIA_PLACEHOLDER;

pub use crate::parsing::header::HeaderPattern;

/// Number of busiest days kept in [`ChatStats::top_days`](crate::core::stats::ChatStats::top_days).
pub const DEFAULT_TOP_DAYS: usize = 20;

/// Configuration for transcript parsing.
///
/// # Example
///
/// ```rust
/// use chatstat::config::TranscriptConfig;
///
/// let config = TranscriptConfig::new()
///     .with_media_marker("<Без медиафайлов>");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptConfig {
    /// Which timestamp prefixes start a new message (default: flexible)
    pub header_pattern: HeaderPattern,

    /// Body text marking an omitted attachment (default: `<Media omitted>`)
    pub media_marker: String,
}

impl Default for TranscriptConfig {
    fn default() -> Self {
        Self {
            header_pattern: HeaderPattern::default(),
            media_marker: MEDIA_PLACEHOLDER.to_string(),
        }
    }
}

impl TranscriptConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the header pattern.
    #[must_use]
    pub fn with_header_pattern(mut self, pattern: HeaderPattern) -> Self {
        self.header_pattern = pattern;
        self
    }

    /// Sets the media placeholder marker.
    #[must_use]
    pub fn with_media_marker(mut self, marker: impl Into<String>) -> Self {
        self.media_marker = marker.into();
        self
    }
}

/// What the aggregator does with a message whose timestamp doesn't resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvalidDateTimePolicy {
    /// Count the message in totals and per-user figures, leave it out of
    /// every time-based figure, and record it in
    /// [`ChatStats::unparseable_datetimes`](crate::core::stats::ChatStats::unparseable_datetimes).
    #[default]
    Skip,

    /// Fail the whole aggregation on the first bad timestamp.
    Abort,
}

/// Configuration for statistics aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsConfig {
    /// Maximum number of entries in the busiest-days ranking (default: 20)
    pub top_days: usize,

    /// Handling of unresolvable timestamps (default: skip)
    pub invalid_datetime: InvalidDateTimePolicy,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            top_days: DEFAULT_TOP_DAYS,
            invalid_datetime: InvalidDateTimePolicy::default(),
        }
    }
}

impl StatsConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how many busiest days to keep.
    #[must_use]
    pub fn with_top_days(mut self, n: usize) -> Self {
        self.top_days = n;
        self
    }

    /// Sets the unresolvable-timestamp policy.
    #[must_use]
    pub fn with_invalid_datetime(mut self, policy: InvalidDateTimePolicy) -> Self {
        self.invalid_datetime = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcript_config_default() {
        let config = TranscriptConfig::default();
        assert_eq!(config.header_pattern, HeaderPattern::Flexible);
        assert_eq!(config.media_marker, "<Media omitted>");
    }

    #[test]
    fn test_transcript_config_builder() {
        let config = TranscriptConfig::new()
            .with_header_pattern(HeaderPattern::Legacy)
            .with_media_marker("[attachment]");

        assert_eq!(config.header_pattern, HeaderPattern::Legacy);
        assert_eq!(config.media_marker, "[attachment]");
    }

    #[test]
    fn test_stats_config_default() {
        let config = StatsConfig::default();
        assert_eq!(config.top_days, 20);
        assert_eq!(config.invalid_datetime, InvalidDateTimePolicy::Skip);
    }

    #[test]
    fn test_stats_config_builder() {
        let config = StatsConfig::new()
            .with_top_days(3)
            .with_invalid_datetime(InvalidDateTimePolicy::Abort);

        assert_eq!(config.top_days, 3);
        assert_eq!(config.invalid_datetime, InvalidDateTimePolicy::Abort);
    }

    #[test]
    fn test_config_serde_names() {
        let json = serde_json::to_string(&StatsConfig::default()).unwrap();
        assert!(json.contains("\"skip\""));

        let config: TranscriptConfig =
            serde_json::from_str(r#"{"header_pattern":"legacy","media_marker":"x"}"#).unwrap();
        assert_eq!(config.header_pattern, HeaderPattern::Legacy);
    }
}
