//! Message record produced by the transcript parser.
//!
//! A [`Message`] is one header line of an exported transcript plus any
//! continuation lines that followed it. The timestamp is kept exactly as it
//! appeared in the export; resolving it into a calendar instant is the job of
//! [`resolve_datetime`](crate::parsing::datetime::resolve_datetime) and
//! happens only when statistics are computed.
//!
//! # Examples
//!
//! ```
//! use chatstat::Message;
//!
//! let msg = Message::new("01/01/23, 09:00", "Alice", "Hello");
//! assert_eq!(msg.sender(), "Alice");
//! assert_eq!(msg.body(), "Hello");
//! assert!(!msg.is_media());
//! ```
//!
//! ## Serialization
//!
//! ```
//! use chatstat::Message;
//!
//! let msg = Message::new("01/01/23, 09:00", "Bob", "<Media omitted>");
//! let json = serde_json::to_string(&msg)?;
//! let parsed: Message = serde_json::from_str(&json)?;
//!
//! assert_eq!(msg, parsed);
//! assert!(parsed.is_media());
//! # Ok::<(), serde_json::Error>(())
//! ```

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::DateTimeParseError;
use crate::parsing::datetime::resolve_datetime;

/// Placeholder WhatsApp writes instead of an attachment when exporting
/// "without media".
pub const MEDIA_PLACEHOLDER: &str = "<Media omitted>";

/// A single chat message as found in a transcript.
///
/// # Fields
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `datetime_text` | `String` | Raw timestamp, e.g. `05/08/21, 14:31` |
/// | `sender` | `String` | Display name before the first `": "` |
/// | `body` | `String` | Message text, continuation lines appended |
/// | `is_media` | `bool` | Body carried the media placeholder on its header line |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Raw date/time text as it appeared before the ` - ` separator.
    pub datetime_text: String,

    /// Display name of the author.
    pub sender: String,

    /// Message text.
    ///
    /// Continuation lines are concatenated onto the body without any
    /// separator, so a two-line message `Hello` / `world` reads `Helloworld`.
    pub body: String,

    /// `true` when the header line's body contained the media placeholder.
    #[serde(default)]
    pub is_media: bool,
}

impl Message {
    /// Creates a message, detecting [`MEDIA_PLACEHOLDER`] in `body`.
    pub fn new(
        datetime_text: impl Into<String>,
        sender: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self::with_media_marker(datetime_text, sender, body, MEDIA_PLACEHOLDER)
    }

    /// Creates a message, detecting a custom media `marker` in `body`.
    ///
    /// An empty marker never matches.
    pub fn with_media_marker(
        datetime_text: impl Into<String>,
        sender: impl Into<String>,
        body: impl Into<String>,
        marker: &str,
    ) -> Self {
        let body = body.into();
        let is_media = !marker.is_empty() && body.contains(marker);
        Self {
            datetime_text: datetime_text.into(),
            sender: sender.into(),
            body,
            is_media,
        }
    }

    /// Appends a continuation line to the body, verbatim.
    ///
    /// The media flag is decided on the header line and is not revisited.
    pub fn append_continuation(&mut self, line: &str) {
        self.body.push_str(line);
    }

    // =========================================================================
    // Accessor methods
    // =========================================================================

    /// Returns the raw timestamp text.
    pub fn datetime_text(&self) -> &str {
        &self.datetime_text
    }

    /// Returns the sender name.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Returns the message body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns `true` if the message stands in for an omitted attachment.
    pub fn is_media(&self) -> bool {
        self.is_media
    }

    /// Resolves the raw timestamp into a local calendar instant.
    pub fn datetime(&self) -> Result<NaiveDateTime, DateTimeParseError> {
        resolve_datetime(&self.datetime_text)
    }

    // =========================================================================
    // Utility methods
    // =========================================================================

    /// Number of whitespace-separated words in the body.
    pub fn word_count(&self) -> usize {
        self.body.split_whitespace().count()
    }

    /// Number of non-whitespace characters in the body.
    ///
    /// Punctuation and emoji count as letters.
    pub fn letter_count(&self) -> usize {
        self.body.chars().filter(|c| !c.is_whitespace()).count()
    }
}
