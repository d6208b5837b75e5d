//! Edge case tests for chatstat
//!
//! These tests cover boundary conditions of the line parser, the timestamp
//! resolver and the aggregator that regular unit tests don't reach.

use chatstat::Message;
use chatstat::config::{HeaderPattern, TranscriptConfig};
use chatstat::core::filter::{FilterConfig, apply_filters};
use chatstat::core::stats::{aggregate, top_days};
use chatstat::error::DateTimeParseError;
use chatstat::parser::{TranscriptParser, parse_transcript};
use chatstat::parsing::{is_header_line, resolve_datetime};
use chrono::{Datelike, Timelike};

// =========================================================================
// Unicode and special character tests
// =========================================================================

#[test]
fn test_unicode_senders_and_bodies() {
    let text = "\
01/01/23, 09:00 - Иван: Привет мир!
01/01/23, 09:01 - 田中太郎: こんにちは世界！
01/01/23, 09:02 - محمد: مرحبا بالعالم
01/01/23, 09:03 - User 🎉: Hello 👋 World 🌍";
    let messages = parse_transcript(text);

    assert_eq!(messages.len(), 4);
    assert_eq!(messages[1].sender, "田中太郎");
    assert_eq!(messages[2].body, "مرحبا بالعالم");
    assert_eq!(messages[3].sender, "User 🎉");
}

#[test]
fn test_letters_count_scalar_values() {
    let msg = Message::new("01/01/23, 09:00", "A", "héllo 🌍");
    // 5 letters + 1 emoji, the space is not counted
    assert_eq!(msg.letter_count(), 6);
    assert_eq!(msg.word_count(), 2);

    let combining = Message::new("01/01/23, 09:00", "A", "e\u{0301}");
    assert_eq!(combining.letter_count(), 2);
}

#[test]
fn test_narrow_no_break_space_before_meridiem() {
    let at = resolve_datetime("01/01/23, 2:05\u{202F}PM").unwrap();
    assert_eq!(at.hour(), 14);
}

#[test]
fn test_colon_in_body() {
    let messages = parse_transcript("01/01/23, 09:00 - Alice: ratio is 3:1: nice");
    assert_eq!(messages[0].sender, "Alice");
    assert_eq!(messages[0].body, "ratio is 3:1: nice");
}

#[test]
fn test_bare_colon_gives_empty_body() {
    let messages = parse_transcript("01/01/23, 09:00 - Alice:");
    assert_eq!(messages[0].sender, "Alice");
    assert_eq!(messages[0].body, "");
    assert_eq!(messages[0].word_count(), 0);
}

#[test]
fn test_dash_in_sender_name() {
    // The first dash is the separator, later ones belong to the name.
    let messages = parse_transcript("01/01/23, 09:00 - Jean-Luc: Engage");
    assert_eq!(messages[0].sender, "Jean-Luc");
}

// =========================================================================
// Line classification
// =========================================================================

#[test]
fn test_header_patterns_disagree_on_four_digit_years() {
    let line = "01/01/2023, 09:00 - Alice: Hi";
    assert!(is_header_line(line));
    assert!(HeaderPattern::Flexible.matches(line));
    assert!(!HeaderPattern::Legacy.matches(line));
}

#[test]
fn test_legacy_folds_four_digit_lines() {
    let text = "01/01/23, 09:00 - Alice: Hi\n01/01/2023, 09:01 - Bob: Hey";
    let parser =
        TranscriptParser::with_config(TranscriptConfig::new().with_header_pattern(HeaderPattern::Legacy));
    let outcome = parser.parse_str(text);

    assert_eq!(outcome.messages.len(), 1);
    assert_eq!(outcome.continuation_lines, 1);
    assert!(outcome.messages[0].body.ends_with("Bob: Hey"));
}

#[test]
fn test_garbage_before_first_message() {
    let outcome = TranscriptParser::new().parse_str("just some text\n01/01/23, 09:00 - Alice: Hi");
    assert_eq!(outcome.messages.len(), 1);
    assert_eq!(outcome.skipped_lines, 1);
}

#[test]
fn test_dropped_header_does_not_end_message() {
    let text = "\
01/01/23, 09:00 - Alice: Hi
01/01/23, 09:01 - Bob left
still Alice";
    let outcome = TranscriptParser::new().parse_str(text);

    assert_eq!(outcome.messages.len(), 1);
    assert_eq!(outcome.skipped_lines, 1);
    assert_eq!(outcome.messages[0].body, "Histill Alice");
}

#[test]
fn test_media_flag_not_set_by_continuation() {
    let messages = parse_transcript("01/01/23, 09:00 - Alice: look\n<Media omitted>");
    assert!(!messages[0].is_media);
}

#[test]
fn test_very_long_line() {
    let body = "word ".repeat(10_000);
    let messages = parse_transcript(&format!("01/01/23, 09:00 - Alice: {body}"));
    assert_eq!(messages[0].word_count(), 10_000);
}

#[test]
fn test_multibyte_near_slicing_points() {
    // Neither line may panic, whatever sits around the dash.
    let _ = parse_transcript("日-本: x");
    let _ = parse_transcript("日本語");
    let _ = parse_transcript("-");
    let _ = parse_transcript("é");
}

// =========================================================================
// Timestamp boundaries
// =========================================================================

#[test]
fn test_year_pivot() {
    assert_eq!(resolve_datetime("01/01/69, 00:00").unwrap().year(), 2069);
    assert_eq!(resolve_datetime("01/01/70, 00:00").unwrap().year(), 1970);
    assert_eq!(resolve_datetime("01/01/1999, 00:00").unwrap().year(), 1999);
}

#[test]
fn test_midnight_and_noon() {
    assert_eq!(resolve_datetime("01/01/23, 12:00 AM").unwrap().hour(), 0);
    assert_eq!(resolve_datetime("01/01/23, 12:00 PM").unwrap().hour(), 12);
    assert_eq!(resolve_datetime("01/01/23, 11:59 PM").unwrap().hour(), 23);
}

#[test]
fn test_leap_day() {
    assert!(resolve_datetime("29/02/24, 10:00").is_ok());
    assert!(matches!(
        resolve_datetime("29/02/23, 10:00"),
        Err(DateTimeParseError::OutOfRange(_))
    ));
}

#[test]
fn test_out_of_range_never_rolls_over() {
    for text in [
        "32/01/23, 10:00",
        "01/13/23, 10:00",
        "01/01/23, 24:00",
        "01/01/23, 10:60",
    ] {
        assert!(
            matches!(resolve_datetime(text), Err(DateTimeParseError::OutOfRange(_))),
            "{text}"
        );
    }
}

#[test]
fn test_malformed_timestamps() {
    assert!(matches!(
        resolve_datetime("01/01/23 10:00"),
        Err(DateTimeParseError::MissingSeparator(_))
    ));
    assert!(matches!(
        resolve_datetime("01-01-23, 10:00"),
        Err(DateTimeParseError::InvalidDate(_))
    ));
    assert!(matches!(
        resolve_datetime("01/01/23, ten"),
        Err(DateTimeParseError::InvalidTime(_))
    ));
}

// =========================================================================
// Aggregation boundaries
// =========================================================================

#[test]
fn test_hour_buckets_boundaries() {
    let messages = parse_transcript("01/01/23, 00:00 - A: x\n01/01/23, 23:59 - A: y");
    let stats = aggregate(&messages);
    assert_eq!(stats.messages_per_hour[0], 1);
    assert_eq!(stats.messages_per_hour[23], 1);
}

#[test]
fn test_month_order_is_chronological() {
    let messages = vec![
        Message::new("01/03/23, 10:00", "A", "x"),
        Message::new("01/01/23, 10:00", "A", "x"),
        Message::new("01/12/22, 10:00", "A", "x"),
    ];
    let stats = aggregate(&messages);
    let keys: Vec<&str> = stats.messages_per_month.iter().map(|p| p.key.as_str()).collect();
    assert_eq!(keys, ["2022-12", "2023-01", "2023-03"]);
}

#[test]
fn test_only_unresolvable_messages() {
    let messages = vec![
        Message::new("garbage", "A", "hello world"),
        Message::new("more garbage", "B", "x"),
    ];
    let stats = aggregate(&messages);

    assert_eq!(stats.total_messages, 2);
    assert_eq!(stats.total_words, 3);
    assert_eq!(stats.unparseable_datetimes, 2);
    assert!(stats.from.is_none());
    assert!(stats.messages_per_month.is_empty());
    assert!(stats.top_days.is_empty());
    assert!(top_days(&messages, 5).is_empty());
}

#[test]
fn test_blank_body_average() {
    let stats = aggregate(&[Message::new("01/01/23, 10:00", "A", "   ")]);
    let user = stats.user("A").unwrap();
    assert_eq!(user.letters, 0);
    assert_eq!(user.avg_letters_per_message, 0.0);
}

#[test]
fn test_date_filter_on_four_digit_years() {
    let messages = vec![
        Message::new("31/12/2023, 23:59", "A", "old"),
        Message::new("01/01/2024, 00:00", "A", "new"),
    ];
    let config = FilterConfig::new().with_date_from("2024-01-01").unwrap();
    let kept = apply_filters(messages, &config);
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].body, "new");
}
