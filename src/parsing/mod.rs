//! Shared transcript parsing utilities.
//!
//! This module contains the pure building blocks the
//! [`TranscriptParser`](crate::parser::TranscriptParser) and the statistics
//! aggregator are built from:
//! - [`header`] - header-line classification
//! - [`datetime`] - timestamp resolution

pub mod datetime;
pub mod header;

pub use datetime::resolve_datetime;
pub use header::{HeaderPattern, is_header_line};
