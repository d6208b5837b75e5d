//! # Chatstat
//!
//! A Rust library for computing message statistics from exported chat
//! transcripts of the `DD/MM/YY, HH:MM - Sender: text` kind.
//!
//! ## Overview
//!
//! Chatstat reads a plain-text transcript, groups its lines into messages
//! (continuation lines belong to the message above them), and aggregates:
//! - totals of messages, words, letters and omitted-media placeholders
//! - the same figures per sender, in order of first appearance
//! - a 24-bucket histogram of messages per hour of day
//! - messages per calendar month and the busiest days
//!
//! The result, [`ChatStats`](core::stats::ChatStats), renders as a text
//! report with bar charts, as JSON, or as CSV.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chatstat::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let outcome = TranscriptParser::new().parse("chat.txt".as_ref())?;
//!     let stats = aggregate(&outcome.messages);
//!
//!     print!("{}", to_text(&stats));
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - [`TranscriptParser`](parser::TranscriptParser), line grouping into messages
//! - [`parsing`] - header recognition and timestamp resolution
//! - [`message`] - [`Message`] and its word/letter metrics
//! - [`config`] - [`TranscriptConfig`](config::TranscriptConfig), [`StatsConfig`](config::StatsConfig)
//! - [`core`] - filtering, aggregation and report writers
//!   - [`core::filter`] - [`FilterConfig`](core::filter::FilterConfig), [`apply_filters`](core::filter::apply_filters)
//!   - [`core::stats`] - [`aggregate`](core::stats::aggregate), [`aggregate_with_config`](core::stats::aggregate_with_config)
//!   - [`core::output`] - text, JSON and CSV writers
//! - [`format`] - [`ReportFormat`](format::ReportFormat) dispatch
//! - [`cli`] - CLI arguments (feature `cli`)
//! - [`error`] - [`ChatstatError`], [`Result`]
//! - [`prelude`] - Convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod message;
pub mod parser;
pub mod parsing;

// Re-export the main types at the crate root for convenience
pub use error::{ChatstatError, Result};
pub use message::Message;

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use chatstat::prelude::*;
/// ```
pub mod prelude {
    pub use crate::Message;

    pub use crate::error::{ChatstatError, Result};

    pub use crate::parser::{ParseOutcome, TranscriptParser, parse_transcript};

    pub use crate::config::{HeaderPattern, InvalidDateTimePolicy, StatsConfig, TranscriptConfig};

    pub use crate::core::filter::{FilterConfig, apply_filters};

    pub use crate::core::stats::{ChatStats, aggregate, aggregate_with_config};

    pub use crate::core::output::{to_text, write_text};
    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{to_json, write_json};

    pub use crate::format::{ReportFormat, to_report_string, write_report};
}
