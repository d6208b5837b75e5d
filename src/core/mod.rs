//! Core processing logic for chatstat.
//!
//! This module contains:
//! - [`filter`] - Message filtering by date and sender
//! - [`stats`] - Aggregation of messages into [`ChatStats`]
//! - [`output`] - Report writers (text, JSON, CSV)
//!
//! # Quick Start
//!
//! ```rust
//! use chatstat::core::{FilterConfig, aggregate, apply_filters, to_text};
//! use chatstat::parser::parse_transcript;
//!
//! let messages = parse_transcript("01/01/23, 09:00 - Alice: Hello!");
//! let messages = apply_filters(messages, &FilterConfig::new().with_sender("alice"));
//! let report = to_text(&aggregate(&messages));
//! assert!(report.contains("Total Messages: 1"));
//! ```

pub mod filter;
pub mod output;
pub mod stats;

pub use filter::{FilterConfig, apply_filters};
pub use stats::{ChatStats, PeriodCount, UserStats, aggregate, aggregate_with_config, top_days};

pub use crate::Message;

pub use output::{to_text, write_text};
#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{to_json, write_json};
