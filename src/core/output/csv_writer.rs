//! CSV report writer.
//!
//! Every figure of [`ChatStats`] becomes one `Section;Key;Value` row, so the
//! whole report is a single flat table.

use std::fs::File;

use crate::core::stats::ChatStats;
use crate::error::ChatstatError;

const HEADER: [&str; 3] = ["Section", "Key", "Value"];

/// Writes the statistics to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `Section`, `Key`, `Value`
/// - Sections: `overall`, `messages`, `words`, `letters`, `avg_letters`,
///   `media`, `hour`, `month`, `top_day`
/// - Encoding: UTF-8
pub fn write_csv(stats: &ChatStats, output_path: &str) -> Result<(), ChatstatError> {
    let file = File::create(output_path)?;
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(file);

    writer.write_record(HEADER)?;
    for record in build_records(stats) {
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}

/// Converts the statistics to a CSV string.
pub fn to_csv(stats: &ChatStats) -> Result<String, ChatstatError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(Vec::new());

    writer.write_record(HEADER)?;
    for record in build_records(stats) {
        writer.write_record(&record)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ChatstatError::Io(e.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}

fn build_records(stats: &ChatStats) -> Vec<[String; 3]> {
    let row = |section: &str, key: &str, value: String| [section.to_string(), key.to_string(), value];
    let instant = |at: Option<chrono::NaiveDateTime>| {
        at.map(|at| at.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_default()
    };

    let mut records = vec![
        row("overall", "from", instant(stats.from)),
        row("overall", "to", instant(stats.to)),
        row("overall", "total_messages", stats.total_messages.to_string()),
        row("overall", "total_words", stats.total_words.to_string()),
        row("overall", "total_letters", stats.total_letters.to_string()),
        row("overall", "total_media", stats.total_media.to_string()),
        row(
            "overall",
            "unparseable_datetimes",
            stats.unparseable_datetimes.to_string(),
        ),
    ];

    for user in &stats.per_user {
        records.push(row("messages", &user.name, user.messages.to_string()));
        records.push(row("words", &user.name, user.words.to_string()));
        records.push(row("letters", &user.name, user.letters.to_string()));
        records.push(row(
            "avg_letters",
            &user.name,
            user.avg_letters_per_message.round().to_string(),
        ));
        records.push(row("media", &user.name, user.media.to_string()));
    }

    for (hour, count) in stats.messages_per_hour.iter().enumerate() {
        records.push(row("hour", &hour.to_string(), count.to_string()));
    }
    for month in &stats.messages_per_month {
        records.push(row("month", &month.key, month.count.to_string()));
    }
    for day in &stats.top_days {
        records.push(row("top_day", &day.key, day.count.to_string()));
    }

    records
}
