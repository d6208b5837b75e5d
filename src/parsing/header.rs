//! Header-line classification.
//!
//! A transcript line either starts a new message (a *header*, beginning with
//! a `DD/MM/YY, HH:MM` timestamp) or continues the previous one. The
//! classification is a pure predicate so it can be tested on its own.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// `DD/MM/YY, HH:MM` or `DD/MM/YYYY, H:MM` at the start of a line.
static FLEXIBLE_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{2}/[0-9]{2}/(?:[0-9]{4}|[0-9]{2}), [0-9]{1,2}:[0-9]{2}")
        .expect("valid header regex")
});

/// Exactly `DD/MM/YY, HH:MM` at the start of a line.
static LEGACY_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{2}/[0-9]{2}/[0-9]{2}, [0-9]{2}:[0-9]{2}").expect("valid header regex")
});

/// Which timestamp prefixes count as the start of a new message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderPattern {
    /// Two- or four-digit years and one- or two-digit hours.
    ///
    /// Accepts everything the timestamp resolver accepts, e.g.
    /// `05/08/21, 14:31` and `05/08/2021, 2:31 PM`.
    #[default]
    Flexible,

    /// Two-digit years and two-digit hours only.
    ///
    /// Lines such as `05/08/2021, 14:31 - ...` are then treated as
    /// continuations of the previous message. Kept for reproducing reports
    /// made by older tooling.
    Legacy,
}

impl HeaderPattern {
    /// Returns `true` if `line` starts with a timestamp of this shape.
    pub fn matches(self, line: &str) -> bool {
        match self {
            HeaderPattern::Flexible => FLEXIBLE_HEADER.is_match(line),
            HeaderPattern::Legacy => LEGACY_HEADER.is_match(line),
        }
    }
}

impl std::fmt::Display for HeaderPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HeaderPattern::Flexible => write!(f, "flexible"),
            HeaderPattern::Legacy => write!(f, "legacy"),
        }
    }
}

/// Returns `true` if `line` begins a new message under the default pattern.
///
/// # Example
///
/// ```rust
/// use chatstat::parsing::is_header_line;
///
/// assert!(is_header_line("01/01/23, 09:00 - Alice: Hello"));
/// assert!(is_header_line("05/08/2021, 2:31 PM - Bob: Hi"));
/// assert!(!is_header_line("...still typing"));
/// ```
pub fn is_header_line(line: &str) -> bool {
    HeaderPattern::default().matches(line)
}
