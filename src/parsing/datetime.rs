//! Transcript timestamp resolution.
//!
//! Exports write timestamps as `DD/MM/YY, HH:MM` (24-hour clock) or
//! `DD/MM/YYYY, H:MM AM` (12-hour clock). Both resolve to a
//! [`NaiveDateTime`]: the export carries no timezone, so the instant is in
//! the exporting phone's local calendar.

use chrono::{NaiveDate, NaiveDateTime};

use crate::error::DateTimeParseError;

/// Twelve-hour clock marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Meridiem {
    Am,
    Pm,
}

/// Resolves a transcript timestamp into a local calendar instant.
///
/// - Two-digit years `00..=69` map to `2000..=2069`, `70..=99` to
///   `1970..=1999`; larger values are taken literally.
/// - `PM` adds 12 to hours below 12, so `2:31 PM` is 14:31 and `12:05 PM`
///   stays at noon. A redundant `PM` on a 24-hour value (`14:05 PM`) is
///   ignored.
/// - `12:xx AM` is just after midnight.
/// - Seconds are always zero.
///
/// # Example
///
/// ```rust
/// use chatstat::parsing::resolve_datetime;
/// use chrono::Timelike;
///
/// let dt = resolve_datetime("05/08/2021, 2:31 PM")?;
/// assert_eq!((dt.hour(), dt.minute()), (14, 31));
/// # Ok::<(), chatstat::error::DateTimeParseError>(())
/// ```
pub fn resolve_datetime(text: &str) -> Result<NaiveDateTime, DateTimeParseError> {
    let (date_part, time_part) = text
        .split_once(", ")
        .ok_or_else(|| DateTimeParseError::MissingSeparator(text.to_string()))?;

    let (day, month, year) =
        parse_date(date_part).ok_or_else(|| DateTimeParseError::InvalidDate(text.to_string()))?;
    let (hour, minute) =
        parse_time(time_part).ok_or_else(|| DateTimeParseError::InvalidTime(text.to_string()))?;

    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .ok_or_else(|| DateTimeParseError::OutOfRange(text.to_string()))
}

/// Parses `DD/MM/YY` or `DD/MM/YYYY` into `(day, month, year)`.
fn parse_date(date_part: &str) -> Option<(u32, u32, i32)> {
    let mut fields = date_part.split('/');
    let day = parse_number(fields.next()?)?;
    let month = parse_number(fields.next()?)?;
    let year = parse_number(fields.next()?)?;
    if fields.next().is_some() {
        return None;
    }

    Some((day, month, expand_year(year)?))
}

/// Maps a two-digit year onto a century; larger values pass through.
fn expand_year(year: u32) -> Option<i32> {
    let year = i32::try_from(year).ok()?;
    Some(match year {
        0..=69 => 2000 + year,
        70..=99 => 1900 + year,
        _ => year,
    })
}

/// Parses `HH:MM` with an optional trailing `AM`/`PM` into `(hour, minute)`.
fn parse_time(time_part: &str) -> Option<(u32, u32)> {
    let time_part = time_part.trim();

    let (clock, meridiem) = match time_part.split_once(char::is_whitespace) {
        Some((clock, marker)) => {
            let meridiem = match marker.trim() {
                "AM" => Meridiem::Am,
                "PM" => Meridiem::Pm,
                _ => return None,
            };
            (clock, Some(meridiem))
        }
        None => (time_part, None),
    };

    let (hour, minute) = clock.split_once(':')?;
    let hour = parse_number(hour)?;
    let minute = parse_number(minute)?;

    let hour = match meridiem {
        Some(Meridiem::Pm) if hour < 12 => hour + 12,
        Some(Meridiem::Am) if hour == 12 => 0,
        _ => hour,
    };

    Some((hour, minute))
}

/// Parses a non-empty run of ASCII digits.
fn parse_number(field: &str) -> Option<u32> {
    let field = field.trim();
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}
