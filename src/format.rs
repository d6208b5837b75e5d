//! Report format selection.
//!
//! [`ReportFormat`] names the three renderings of
//! [`ChatStats`](crate::core::stats::ChatStats) and dispatches to the matching
//! writer in [`core::output`](crate::core::output). It carries no CLI
//! framework dependency.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() -> chatstat::Result<()> {
//! use chatstat::format::{ReportFormat, to_report_string};
//! use chatstat::core::stats::aggregate;
//! use chatstat::parser::parse_transcript;
//!
//! let stats = aggregate(&parse_transcript("01/01/23, 09:00 - Alice: Hello!"));
//!
//! let csv = to_report_string(&stats, ReportFormat::Csv)?;
//! assert!(csv.starts_with("Section;Key;Value"));
//!
//! // Or detect the format from an output file name
//! let format = ReportFormat::from_path("stats.json")?;
//! assert_eq!(format, ReportFormat::Json);
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};

use crate::core::stats::ChatStats;
use crate::error::ChatstatError;

/// Rendering of a statistics report.
///
/// # Example
///
/// ```rust
/// use chatstat::format::ReportFormat;
/// use std::str::FromStr;
///
/// let format = ReportFormat::from_str("csv").unwrap();
/// assert_eq!(format, ReportFormat::Csv);
/// assert_eq!(format.extension(), "csv");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum ReportFormat {
    /// Human-readable report with bar charts (default)
    #[default]
    Text,

    /// Pretty-printed JSON object
    Json,

    /// `Section;Key;Value` rows with semicolon delimiter
    Csv,
}

impl ReportFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Text => "txt",
            ReportFormat::Json => "json",
            ReportFormat::Csv => "csv",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["text", "txt", "json", "csv"]
    }

    /// Returns all available formats.
    pub fn all() -> &'static [ReportFormat] {
        &[ReportFormat::Text, ReportFormat::Json, ReportFormat::Csv]
    }

    /// Returns the cargo feature a format needs, if any.
    pub fn required_feature(&self) -> Option<&'static str> {
        match self {
            ReportFormat::Text => None,
            ReportFormat::Json => Some("json-output"),
            ReportFormat::Csv => Some("csv-output"),
        }
    }

    /// Detects format from a file path based on extension.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatstat::format::ReportFormat;
    ///
    /// assert_eq!(ReportFormat::from_path("report.txt").unwrap(), ReportFormat::Text);
    /// assert!(ReportFormat::from_path("report.xml").is_err());
    /// ```
    pub fn from_path(path: &str) -> Result<Self, ChatstatError> {
        let ext = path.rsplit('.').next().unwrap_or("").to_lowercase();

        match ext.as_str() {
            "txt" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            "csv" => Ok(ReportFormat::Csv),
            _ => Err(ChatstatError::invalid_format(
                "report",
                format!("Unknown file extension: '.{ext}'. Expected one of: txt, json, csv"),
            )),
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Text => write!(f, "Text"),
            ReportFormat::Json => write!(f, "JSON"),
            ReportFormat::Csv => write!(f, "CSV"),
        }
    }
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            "csv" => Ok(ReportFormat::Csv),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                ReportFormat::all_names().join(", ")
            )),
        }
    }
}

fn missing_feature(format: ReportFormat) -> ChatstatError {
    ChatstatError::invalid_format(
        "report",
        format!(
            "Report format {} requires the '{}' feature to be enabled",
            format,
            format.required_feature().unwrap_or_default()
        ),
    )
}

/// Writes a report to a file in the specified format.
///
/// # Errors
///
/// Returns an error if:
/// - The required feature for the format is not enabled
/// - The file cannot be written
pub fn write_report(stats: &ChatStats, path: &str, format: ReportFormat) -> Result<(), ChatstatError> {
    match format {
        ReportFormat::Text => crate::core::output::write_text(stats, path),
        #[cfg(feature = "json-output")]
        ReportFormat::Json => crate::core::output::write_json(stats, path),
        #[cfg(feature = "csv-output")]
        ReportFormat::Csv => crate::core::output::write_csv(stats, path),
        #[allow(unreachable_patterns)]
        _ => Err(missing_feature(format)),
    }
}

/// Renders a report to a string in the specified format.
pub fn to_report_string(stats: &ChatStats, format: ReportFormat) -> Result<String, ChatstatError> {
    match format {
        ReportFormat::Text => Ok(crate::core::output::to_text(stats)),
        #[cfg(feature = "json-output")]
        ReportFormat::Json => crate::core::output::to_json(stats),
        #[cfg(feature = "csv-output")]
        ReportFormat::Csv => crate::core::output::to_csv(stats),
        #[allow(unreachable_patterns)]
        _ => Err(missing_feature(format)),
    }
}
