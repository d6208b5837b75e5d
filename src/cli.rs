//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`OutputFormat`] - Report format options
//!
//! [`Args`] also knows how to turn itself into the library configs, so the
//! binary stays a thin pipeline.

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::{
    DEFAULT_TOP_DAYS, HeaderPattern, InvalidDateTimePolicy, StatsConfig, TranscriptConfig,
};
use crate::core::filter::FilterConfig;
use crate::error::ChatstatError;
use crate::format::ReportFormat;

/// Compute message statistics from a chat transcript export.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatstat")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatstat chat.txt
    chatstat chat.txt -f json -o stats.json
    chatstat chat.txt --after 2024-01-01 --from Alice
    chatstat chat.txt --legacy-headers --strict -vv")]
pub struct Args {
    /// Path to the transcript file
    pub input: String,

    /// Report format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Write the report to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<String>,

    /// Number of busiest days to list
    #[arg(long, value_name = "N", default_value_t = DEFAULT_TOP_DAYS)]
    pub top_days: usize,

    /// Fail on the first message whose timestamp cannot be resolved
    #[arg(long)]
    pub strict: bool,

    /// Only accept headers with two-digit years and hours
    #[arg(long)]
    pub legacy_headers: bool,

    /// Only count messages on or after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub after: Option<String>,

    /// Only count messages on or before this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub before: Option<String>,

    /// Only count messages from this sender
    #[arg(long, value_name = "USER")]
    pub from: Option<String>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Parser configuration selected by the flags.
    pub fn transcript_config(&self) -> TranscriptConfig {
        let pattern = if self.legacy_headers {
            HeaderPattern::Legacy
        } else {
            HeaderPattern::Flexible
        };
        TranscriptConfig::new().with_header_pattern(pattern)
    }

    /// Aggregation configuration selected by the flags.
    pub fn stats_config(&self) -> StatsConfig {
        let policy = if self.strict {
            InvalidDateTimePolicy::Abort
        } else {
            InvalidDateTimePolicy::Skip
        };
        StatsConfig::new()
            .with_top_days(self.top_days)
            .with_invalid_datetime(policy)
    }

    /// Filter configuration selected by the flags.
    ///
    /// # Errors
    ///
    /// Returns [`ChatstatError::InvalidDate`] if `--after` or `--before` is
    /// not a `YYYY-MM-DD` date.
    pub fn filter_config(&self) -> Result<FilterConfig, ChatstatError> {
        let mut config = FilterConfig::new();
        if let Some(ref after) = self.after {
            config = config.with_date_from(after)?;
        }
        if let Some(ref before) = self.before {
            config = config.with_date_to(before)?;
        }
        if let Some(ref from) = self.from {
            config = config.with_sender(from.clone());
        }
        Ok(config)
    }

    /// Default log directive for the verbosity count.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

/// Report format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable report with bar charts (default)
    #[default]
    #[value(alias = "txt")]
    Text,

    /// Pretty-printed JSON object
    Json,

    /// `Section;Key;Value` rows with semicolon delimiter
    Csv,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", ReportFormat::from(*self))
    }
}

// Conversion to library format type
impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> ReportFormat {
        match format {
            OutputFormat::Text => ReportFormat::Text,
            OutputFormat::Json => ReportFormat::Json,
            OutputFormat::Csv => ReportFormat::Csv,
        }
    }
}
