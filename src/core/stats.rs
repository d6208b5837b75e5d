//! Statistics aggregation over parsed messages.
//!
//! [`aggregate`] folds a message list into a [`ChatStats`]: global totals,
//! per-user figures, an hour-of-day histogram, a month-by-month count and
//! the busiest days.
//!
//! # Example
//!
//! ```
//! use chatstat::core::stats::aggregate;
//! use chatstat::parser::parse_transcript;
//!
//! let messages = parse_transcript(
//!     "01/01/23, 09:00 - Alice: Hello there\n01/01/23, 21:30 - Bob: <Media omitted>",
//! );
//! let stats = aggregate(&messages);
//!
//! assert_eq!(stats.total_messages, 2);
//! assert_eq!(stats.total_media, 1);
//! assert_eq!(stats.messages_per_hour[9], 1);
//! assert_eq!(stats.user("Alice").map(|u| u.words), Some(2));
//! ```
//!
//! # Unresolvable timestamps
//!
//! With the default [`InvalidDateTimePolicy::Skip`], a message whose
//! timestamp cannot be resolved still counts toward totals and its sender's
//! figures, but not toward `from`/`to`, hours, months or days. The sums of
//! the time-based figures then fall short of `total_messages` by exactly
//! [`ChatStats::unparseable_datetimes`].

use std::cmp::Ordering;
use std::collections::HashMap;

use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::Message;
use crate::config::{DEFAULT_TOP_DAYS, InvalidDateTimePolicy, StatsConfig};
use crate::error::ChatstatError;

/// Activity figures for one sender.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserStats {
    /// Sender display name.
    pub name: String,
    /// Messages sent.
    pub messages: usize,
    /// Whitespace-separated words across all messages.
    pub words: usize,
    /// Non-whitespace characters across all messages.
    pub letters: usize,
    /// Messages standing in for omitted attachments.
    pub media: usize,
    /// `letters / messages`, or 0 when there are no messages.
    pub avg_letters_per_message: f64,
}

impl UserStats {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            messages: 0,
            words: 0,
            letters: 0,
            media: 0,
            avg_letters_per_message: 0.0,
        }
    }
}

/// A count attached to a period key such as `2024-01` or `2024-01-15`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodCount {
    /// Period key.
    pub key: String,
    /// Number of messages in the period.
    pub count: usize,
}

/// Aggregate statistics for a transcript.
///
/// All fields are derived from the message list; renderers only read them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatStats {
    /// Earliest resolved message instant.
    pub from: Option<NaiveDateTime>,
    /// Latest resolved message instant.
    pub to: Option<NaiveDateTime>,

    pub total_messages: usize,
    pub total_words: usize,
    pub total_letters: usize,
    pub total_media: usize,

    /// Per-sender figures, in the order senders first appear chronologically.
    ///
    /// Senders sharing a first minute are ordered by name; senders seen only
    /// on unresolvable messages come last, ordered by name.
    pub per_user: Vec<UserStats>,

    /// Messages per local hour of day, index 0..=23.
    pub messages_per_hour: [usize; 24],

    /// Messages per `YYYY-MM`, oldest month first.
    pub messages_per_month: Vec<PeriodCount>,

    /// Busiest `YYYY-MM-DD` days, most messages first.
    ///
    /// Days with equal counts are listed earliest first.
    pub top_days: Vec<PeriodCount>,

    /// Messages whose timestamp could not be resolved.
    pub unparseable_datetimes: usize,
}

impl ChatStats {
    /// Returns `true` if no messages were aggregated.
    pub fn is_empty(&self) -> bool {
        self.total_messages == 0
    }

    /// Looks up the figures for one sender.
    pub fn user(&self, name: &str) -> Option<&UserStats> {
        self.per_user.iter().find(|u| u.name == name)
    }

    /// Looks up the message count for a `YYYY-MM` month.
    pub fn month(&self, key: &str) -> Option<usize> {
        self.messages_per_month
            .iter()
            .find(|p| p.key == key)
            .map(|p| p.count)
    }
}

/// Counter that remembers the order keys were first seen in.
#[derive(Default)]
struct OrderedCounter {
    entries: Vec<PeriodCount>,
    index: HashMap<String, usize>,
}

impl OrderedCounter {
    fn increment(&mut self, key: String) {
        match self.index.get(&key) {
            Some(&i) => self.entries[i].count += 1,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push(PeriodCount { key, count: 1 });
            }
        }
    }

    fn into_entries(self) -> Vec<PeriodCount> {
        self.entries
    }
}

/// Running totals for the forward pass.
#[derive(Default)]
struct Accumulator {
    stats: ChatStats,
    user_index: HashMap<String, usize>,
    months: OrderedCounter,
}

impl Accumulator {
    fn count(&mut self, message: &Message) {
        let words = message.word_count();
        let letters = message.letter_count();
        let media = usize::from(message.is_media);

        self.stats.total_messages += 1;
        self.stats.total_words += words;
        self.stats.total_letters += letters;
        self.stats.total_media += media;

        let i = match self.user_index.get(&message.sender) {
            Some(&i) => i,
            None => {
                let i = self.stats.per_user.len();
                self.user_index.insert(message.sender.clone(), i);
                self.stats.per_user.push(UserStats::new(&message.sender));
                i
            }
        };

        let user = &mut self.stats.per_user[i];
        user.messages += 1;
        user.words += words;
        user.letters += letters;
        user.media += media;
    }

    fn count_at(&mut self, message: &Message, at: NaiveDateTime) {
        self.count(message);
        self.stats.messages_per_hour[at.hour() as usize] += 1;
        self.months.increment(month_key(at));
    }

    fn finish(mut self) -> ChatStats {
        for user in &mut self.stats.per_user {
            user.avg_letters_per_message = if user.messages == 0 {
                0.0
            } else {
                user.letters as f64 / user.messages as f64
            };
        }
        self.stats.messages_per_month = self.months.into_entries();
        self.stats
    }
}

fn month_key(at: NaiveDateTime) -> String {
    at.format("%Y-%m").to_string()
}

fn day_key(at: NaiveDateTime) -> String {
    at.format("%Y-%m-%d").to_string()
}

/// Aggregates messages with the default configuration.
///
/// Unresolvable timestamps are skipped, so this never fails.
pub fn aggregate(messages: &[Message]) -> ChatStats {
    let instants: Vec<Option<NaiveDateTime>> = messages.iter().map(resolve_or_skip).collect();
    fold(messages, &instants, DEFAULT_TOP_DAYS)
}

/// Aggregates messages with a custom configuration.
///
/// # Errors
///
/// With [`InvalidDateTimePolicy::Abort`], returns
/// [`ChatstatError::DateTime`] for the first message whose timestamp cannot
/// be resolved. With [`InvalidDateTimePolicy::Skip`] it never fails.
pub fn aggregate_with_config(
    messages: &[Message],
    config: &StatsConfig,
) -> Result<ChatStats, ChatstatError> {
    let instants: Vec<Option<NaiveDateTime>> = match config.invalid_datetime {
        InvalidDateTimePolicy::Skip => messages.iter().map(resolve_or_skip).collect(),
        InvalidDateTimePolicy::Abort => messages
            .iter()
            .map(|m| m.datetime().map(Some))
            .collect::<Result<_, _>>()?,
    };

    Ok(fold(messages, &instants, config.top_days))
}

fn resolve_or_skip(message: &Message) -> Option<NaiveDateTime> {
    match message.datetime() {
        Ok(at) => Some(at),
        Err(err) => {
            warn!(sender = %message.sender, error = %err, "skipping unparseable timestamp");
            None
        }
    }
}

fn content_order(a: &Message, b: &Message) -> Ordering {
    (&a.sender, &a.body, &a.datetime_text).cmp(&(&b.sender, &b.body, &b.datetime_text))
}

/// The aggregation proper. `instants[i]` is the resolved timestamp of
/// `messages[i]`.
fn fold(messages: &[Message], instants: &[Option<NaiveDateTime>], top_n: usize) -> ChatStats {
    if messages.is_empty() {
        return ChatStats::default();
    }

    let mut resolved: Vec<(NaiveDateTime, &Message)> = Vec::with_capacity(messages.len());
    let mut unresolved: Vec<&Message> = Vec::new();
    for (message, at) in messages.iter().zip(instants) {
        match at {
            Some(at) => resolved.push((*at, message)),
            None => unresolved.push(message),
        }
    }

    // Ties within a minute (and unresolved messages) are ordered by content,
    // so the result does not depend on transcript order.
    resolved.sort_by(|(a_at, a), (b_at, b)| a_at.cmp(b_at).then_with(|| content_order(a, b)));
    unresolved.sort_by(|a, b| content_order(a, b));

    let mut acc = Accumulator::default();
    acc.stats.from = resolved.first().map(|(at, _)| *at);
    acc.stats.to = resolved.last().map(|(at, _)| *at);

    for (at, message) in &resolved {
        acc.count_at(message, *at);
    }
    for message in &unresolved {
        acc.count(message);
    }

    let mut stats = acc.finish();
    stats.unparseable_datetimes = unresolved.len();
    stats.top_days = rank_days(resolved.iter().map(|(at, _)| *at), top_n);

    debug!(
        messages = stats.total_messages,
        users = stats.per_user.len(),
        unparseable = stats.unparseable_datetimes,
        "aggregated transcript"
    );

    stats
}

/// Counts messages per calendar day and returns the `n` busiest days.
///
/// `instants` must be in chronological order so that tied days come out
/// earliest first.
fn rank_days(instants: impl Iterator<Item = NaiveDateTime>, n: usize) -> Vec<PeriodCount> {
    let mut days = OrderedCounter::default();
    for at in instants {
        days.increment(day_key(at));
    }

    let mut days = days.into_entries();
    days.sort_by(|a, b| b.count.cmp(&a.count));
    days.truncate(n);
    days
}

/// Returns the `n` days with the most messages, busiest first.
///
/// Messages with unresolvable timestamps are ignored. Tied days are listed
/// earliest first, so the result does not depend on the order of `messages`.
pub fn top_days(messages: &[Message], n: usize) -> Vec<PeriodCount> {
    let mut instants: Vec<NaiveDateTime> =
        messages.iter().filter_map(|m| m.datetime().ok()).collect();
    instants.sort_unstable();
    rank_days(instants.into_iter(), n)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msg(datetime: &str, sender: &str, body: &str) -> Message {
        Message::new(datetime, sender, body)
    }

    #[test]
    fn test_empty_input() {
        let stats = aggregate(&[]);
        assert!(stats.is_empty());
        assert!(stats.from.is_none());
        assert!(stats.to.is_none());
        assert!(stats.per_user.is_empty());
        assert_eq!(stats.messages_per_hour, [0; 24]);
        assert!(stats.top_days.is_empty());
    }

    #[test]
    fn test_single_message() {
        let stats = aggregate(&[msg("01/01/23, 09:00", "Alice", "Hello")]);
        assert_eq!(stats.total_messages, 1);
        assert_eq!(stats.total_words, 1);
        assert_eq!(stats.total_letters, 5);
        assert_eq!(stats.user("Alice").unwrap().messages, 1);
        assert_eq!(stats.messages_per_hour[9], 1);
        assert_eq!(stats.month("2023-01"), Some(1));
        assert_eq!(stats.from, stats.to);
    }

    #[test]
    fn test_from_and_to_after_sort() {
        let messages = vec![
            msg("02/01/23, 10:00", "Bob", "later"),
            msg("01/01/23, 09:00", "Alice", "earlier"),
            msg("01/12/22, 23:59", "Carol", "earliest"),
        ];
        let stats = aggregate(&messages);
        assert_eq!(stats.from.unwrap().to_string(), "2022-12-01 23:59:00");
        assert_eq!(stats.to.unwrap().to_string(), "2023-01-02 10:00:00");
    }

    #[test]
    fn test_per_user_order_is_chronological_first_seen() {
        let messages = vec![
            msg("02/01/23, 10:00", "Bob", "b"),
            msg("01/01/23, 09:00", "Alice", "a"),
        ];
        let stats = aggregate(&messages);
        let names: Vec<&str> = stats.per_user.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, ["Alice", "Bob"]);
    }

    #[test]
    fn test_same_minute_senders_ignore_input_order() {
        let forward = vec![
            msg("01/01/23, 09:00", "Bob", "hi"),
            msg("01/01/23, 09:00", "Alice", "hello"),
        ];
        let reversed: Vec<Message> = forward.iter().rev().cloned().collect();

        let stats = aggregate(&forward);
        let names: Vec<&str> = stats.per_user.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, ["Alice", "Bob"]);
        assert_eq!(stats, aggregate(&reversed));
    }

    #[test]
    fn test_unresolved_only_senders_ignore_input_order() {
        let forward = vec![
            msg("garbage", "Zed", "x"),
            msg("01/01/23, 09:00", "Mia", "x"),
            msg("more garbage", "Ann", "y"),
        ];
        let reversed: Vec<Message> = forward.iter().rev().cloned().collect();

        let stats = aggregate(&forward);
        let names: Vec<&str> = stats.per_user.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, ["Mia", "Ann", "Zed"]);
        assert_eq!(stats, aggregate(&reversed));
    }

    #[test]
    fn test_month_order_is_chronological() {
        let messages = vec![
            msg("05/03/23, 10:00", "A", "x"),
            msg("05/01/23, 10:00", "A", "x"),
            msg("06/03/23, 10:00", "A", "x"),
        ];
        let stats = aggregate(&messages);
        let months: Vec<(&str, usize)> = stats
            .messages_per_month
            .iter()
            .map(|p| (p.key.as_str(), p.count))
            .collect();
        assert_eq!(months, [("2023-01", 1), ("2023-03", 2)]);
    }

    #[test]
    fn test_average_letters() {
        let messages = vec![
            msg("01/01/23, 09:00", "Alice", "abc"),
            msg("01/01/23, 09:01", "Alice", "a b"),
        ];
        let stats = aggregate(&messages);
        let alice = stats.user("Alice").unwrap();
        assert_eq!(alice.letters, 5);
        assert!((alice.avg_letters_per_message - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_media_counted_per_user() {
        let messages = vec![
            msg("01/01/23, 09:00", "Bob", "<Media omitted>"),
            msg("01/01/23, 09:01", "Bob", "text"),
        ];
        let stats = aggregate(&messages);
        assert_eq!(stats.total_media, 1);
        assert_eq!(stats.user("Bob").unwrap().media, 1);
    }

    #[test]
    fn test_top_days_ranking_and_ties() {
        let messages = vec![
            msg("03/01/23, 09:00", "A", "x"),
            msg("01/01/23, 09:00", "A", "x"),
            msg("02/01/23, 09:00", "A", "x"),
            msg("02/01/23, 10:00", "A", "x"),
        ];
        let days = top_days(&messages, 20);
        let keys: Vec<&str> = days.iter().map(|p| p.key.as_str()).collect();
        // 02 has two; 03 and 01 tie and are listed earliest first.
        assert_eq!(keys, ["2023-01-02", "2023-01-01", "2023-01-03"]);
    }

    #[test]
    fn test_top_days_truncated() {
        let messages: Vec<Message> = (1..=9)
            .map(|d| msg(&format!("0{d}/01/23, 09:00"), "A", "x"))
            .collect();
        let stats = aggregate_with_config(&messages, &StatsConfig::new().with_top_days(3)).unwrap();
        assert_eq!(stats.top_days.len(), 3);
        assert_eq!(top_days(&messages, 0).len(), 0);
    }

    #[test]
    fn test_skip_policy_counts_totals_only() {
        let messages = vec![
            msg("01/01/23, 09:00", "Alice", "ok"),
            msg("not a date", "Alice", "broken"),
        ];
        let stats = aggregate(&messages);
        assert_eq!(stats.total_messages, 2);
        assert_eq!(stats.user("Alice").unwrap().messages, 2);
        assert_eq!(stats.unparseable_datetimes, 1);
        assert_eq!(stats.messages_per_hour.iter().sum::<usize>(), 1);
        assert_eq!(stats.top_days.iter().map(|p| p.count).sum::<usize>(), 1);
    }

    #[test]
    fn test_all_unparseable() {
        let stats = aggregate(&[msg("", "Alice", "hi")]);
        assert_eq!(stats.total_messages, 1);
        assert!(stats.from.is_none());
        assert!(stats.messages_per_month.is_empty());
    }

    #[test]
    fn test_abort_policy() {
        let messages = vec![
            msg("01/01/23, 09:00", "Alice", "ok"),
            msg("32/01/23, 09:00", "Bob", "bad day"),
        ];
        let config = StatsConfig::new().with_invalid_datetime(InvalidDateTimePolicy::Abort);
        let err = aggregate_with_config(&messages, &config).unwrap_err();
        assert!(err.is_datetime());
    }

    #[test]
    fn test_with_config_matches_default() {
        let messages = vec![
            msg("01/01/23, 09:00", "Alice", "Hello"),
            msg("01/01/23, 21:00", "Bob", "Hi"),
        ];
        let a = aggregate(&messages);
        let b = aggregate_with_config(&messages, &StatsConfig::default()).unwrap();
        assert_eq!(a, b);
    }
}
