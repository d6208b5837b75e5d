//! Transcript line parser.
//!
//! Turns the raw text of an exported chat into [`Message`] records. Each line
//! is either a *header* (`DD/MM/YY, HH:MM - Sender: body`) that starts a new
//! message, or a *continuation* that is appended to the message in progress.
//!
//! # Example
//!
//! ```rust
//! use chatstat::parser::TranscriptParser;
//!
//! let text = "01/01/23, 09:00 - Alice: Hello\n...still typing\n01/01/23, 09:05 - Bob: Hi";
//! let outcome = TranscriptParser::new().parse_str(text);
//!
//! assert_eq!(outcome.messages.len(), 2);
//! assert_eq!(outcome.messages[0].body, "Hello...still typing");
//! assert_eq!(outcome.continuation_lines, 1);
//! ```
//!
//! # Line Handling
//!
//! | Line | Result |
//! |------|--------|
//! | header with `Sender: body` | new message |
//! | any other line, after the first message | appended to the current body, no separator |
//! | header-path line whose remainder has no `:` | dropped, counted in `skipped_lines` |
//!
//! A line that is not a header but arrives before any message exists takes the
//! header path too, so stray text at the top of a file is dropped unless it
//! happens to contain a `:`.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::Message;
use crate::config::TranscriptConfig;
use crate::error::ChatstatError;

/// Messages recovered from a transcript, plus how much of it was discarded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOutcome {
    /// Messages in transcript order.
    pub messages: Vec<Message>,

    /// Lines dropped because no sender could be found (system notices,
    /// garbage before the first message).
    pub skipped_lines: usize,

    /// Lines folded into the body of an earlier message.
    pub continuation_lines: usize,
}

impl ParseOutcome {
    /// Consumes the outcome, keeping only the messages.
    pub fn into_messages(self) -> Vec<Message> {
        self.messages
    }
}

/// Parser for exported chat transcripts.
///
/// # Example
///
/// ```rust,no_run
/// use chatstat::parser::TranscriptParser;
///
/// let parser = TranscriptParser::new();
/// let outcome = parser.parse("chat.txt".as_ref())?;
/// println!("{} messages", outcome.messages.len());
/// # Ok::<(), chatstat::ChatstatError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct TranscriptParser {
    config: TranscriptConfig,
}

impl TranscriptParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: TranscriptConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &TranscriptConfig {
        &self.config
    }

    /// Reads a transcript file into memory and parses it.
    ///
    /// # Errors
    ///
    /// Returns [`ChatstatError::Io`] if the file cannot be read or is not
    /// valid UTF-8. Parsing itself never fails.
    pub fn parse(&self, path: &Path) -> Result<ParseOutcome, ChatstatError> {
        let content = fs::read_to_string(path)?;
        debug!(path = %path.display(), bytes = content.len(), "read transcript");
        Ok(self.parse_str(&content))
    }

    /// Parses transcript text that is already in memory.
    ///
    /// A leading byte order mark is ignored.
    pub fn parse_str(&self, content: &str) -> ParseOutcome {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        let mut outcome = ParseOutcome::default();
        let mut current: Option<Message> = None;

        for (index, line) in content.split('\n').enumerate() {
            if let Some(message) = current.as_mut() {
                if !self.config.header_pattern.matches(line) {
                    message.append_continuation(line);
                    outcome.continuation_lines += 1;
                    continue;
                }
            }

            match self.parse_header(line) {
                Some(message) => {
                    if let Some(done) = current.replace(message) {
                        outcome.messages.push(done);
                    }
                }
                None => {
                    debug!(line = index + 1, "dropping line without a sender");
                    outcome.skipped_lines += 1;
                }
            }
        }

        if let Some(done) = current {
            outcome.messages.push(done);
        }

        debug!(
            messages = outcome.messages.len(),
            skipped = outcome.skipped_lines,
            continuations = outcome.continuation_lines,
            "parsed transcript"
        );

        outcome
    }

    /// Splits a header line into a message, or `None` if it has no sender.
    fn parse_header(&self, line: &str) -> Option<Message> {
        let (datetime_text, remainder) = split_header(line);

        if !remainder.contains(':') {
            return None;
        }

        let (sender, body) = remainder
            .split_once(": ")
            .or_else(|| remainder.split_once(':'))?;

        Some(Message::with_media_marker(
            datetime_text,
            sender,
            body,
            &self.config.media_marker,
        ))
    }
}

/// Splits a header line around its ` - ` separator into
/// `(datetime_text, "sender: body")`.
///
/// The separator is located by the first `-`. When a line has none, the
/// timestamp is the line minus its last two characters and the remainder
/// starts at the second character; such lines rarely survive the sender
/// check. Slicing never panics on multi-byte characters.
fn split_header(line: &str) -> (&str, &str) {
    match line.find('-') {
        Some(dash) => (
            head(line, dash.saturating_sub(1)),
            tail(line, dash + 2),
        ),
        None => {
            let end = line.char_indices().rev().nth(1).map_or(0, |(i, _)| i);
            let start = line.char_indices().nth(1).map_or(line.len(), |(i, _)| i);
            (head(line, end), tail(line, start))
        }
    }
}

/// `line[..end]`, with `end` moved back onto a char boundary.
fn head(line: &str, end: usize) -> &str {
    let mut end = end.min(line.len());
    while !line.is_char_boundary(end) {
        end -= 1;
    }
    &line[..end]
}

/// `line[start..]`, with `start` moved forward onto a char boundary.
fn tail(line: &str, start: usize) -> &str {
    let mut start = start.min(line.len());
    while !line.is_char_boundary(start) {
        start += 1;
    }
    &line[start..]
}

/// Parses transcript text with the default configuration.
///
/// Shorthand for `TranscriptParser::new().parse_str(text).messages`.
pub fn parse_transcript(text: &str) -> Vec<Message> {
    TranscriptParser::new().parse_str(text).into_messages()
}
