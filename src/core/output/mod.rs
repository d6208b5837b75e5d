//! Report writers.
//!
//! This module renders [`ChatStats`](crate::core::stats::ChatStats) in three formats:
//! - [`write_text`] / [`to_text`] - human-readable report with bar charts
//! - [`write_json`] / [`to_json`] - pretty-printed JSON object - requires `json-output` feature
//! - [`write_csv`] / [`to_csv`] - `Section;Key;Value` rows - requires `csv-output` feature
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatstat::Result<()> {
//! use chatstat::core::output::{to_text, write_csv, write_json};
//! use chatstat::core::stats::aggregate;
//! use chatstat::parser::parse_transcript;
//!
//! let stats = aggregate(&parse_transcript("01/01/23, 09:00 - Alice: Hello!"));
//!
//! write_csv(&stats, "stats.csv")?;
//! write_json(&stats, "stats.json")?;
//! print!("{}", to_text(&stats));
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
mod text_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
pub use text_writer::{to_text, write_text};
