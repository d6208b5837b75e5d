//! Plain-text report writer.
//!
//! Renders [`ChatStats`] as a terminal report: an overall block followed by
//! bar charts for each per-user figure, hours of the day, months and the
//! busiest days. Bars are scaled to the largest value in their block.

use std::fs;

use chrono::NaiveDateTime;

use crate::core::stats::ChatStats;
use crate::error::ChatstatError;

/// Width in characters of the longest bar in a block.
const BAR_WIDTH: usize = 30;

const BAR_CHAR: char = '█';

/// Writes the text report to a file.
pub fn write_text(stats: &ChatStats, output_path: &str) -> Result<(), ChatstatError> {
    fs::write(output_path, to_text(stats))?;
    Ok(())
}

/// Renders the text report.
pub fn to_text(stats: &ChatStats) -> String {
    let mut out = String::new();

    let mut overall = vec![
        ("From".to_string(), format_instant(stats.from)),
        ("To".to_string(), format_instant(stats.to)),
        ("Total Messages".to_string(), stats.total_messages.to_string()),
        ("Total Words".to_string(), stats.total_words.to_string()),
        ("Total Letters".to_string(), stats.total_letters.to_string()),
        ("Total Media".to_string(), stats.total_media.to_string()),
    ];
    if stats.unparseable_datetimes > 0 {
        overall.push((
            "Unparseable Timestamps".to_string(),
            stats.unparseable_datetimes.to_string(),
        ));
    }
    render_list(&mut out, "Overall Statistics", &overall);

    let per_user = |f: fn(&crate::core::stats::UserStats) -> f64| -> Vec<(String, u64)> {
        stats
            .per_user
            .iter()
            .map(|u| (u.name.clone(), round(f(u))))
            .collect()
    };
    render_bars(&mut out, "Messages per User", &per_user(|u| u.messages as f64));
    render_bars(&mut out, "Words per User", &per_user(|u| u.words as f64));
    render_bars(&mut out, "Letters per User", &per_user(|u| u.letters as f64));
    render_bars(
        &mut out,
        "Average Letters per Message",
        &per_user(|u| u.avg_letters_per_message),
    );
    render_bars(&mut out, "Media Files per User", &per_user(|u| u.media as f64));

    let hours: Vec<(String, u64)> = stats
        .messages_per_hour
        .iter()
        .enumerate()
        .map(|(h, &count)| (format!("{}:00 - {}:00", h, h + 1), count as u64))
        .collect();
    render_bars(&mut out, "Messages per Hour of Day", &hours);

    let months: Vec<(String, u64)> = stats
        .messages_per_month
        .iter()
        .map(|p| (p.key.clone(), p.count as u64))
        .collect();
    render_bars(&mut out, "Messages per Month", &months);

    let days: Vec<(String, u64)> = stats
        .top_days
        .iter()
        .map(|p| (p.key.clone(), p.count as u64))
        .collect();
    render_bars(&mut out, "Days with Most Messages", &days);

    out
}

fn format_instant(at: Option<NaiveDateTime>) -> String {
    at.map(|at| at.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn round(value: f64) -> u64 {
    value.round().max(0.0) as u64
}

fn render_heading(out: &mut String, heading: &str) {
    out.push_str(heading);
    out.push('\n');
    out.push_str(&"─".repeat(heading.chars().count()));
    out.push('\n');
}

fn render_list(out: &mut String, heading: &str, rows: &[(String, String)]) {
    render_heading(out, heading);
    for (key, value) in rows {
        out.push_str(&format!("{key}: {value}\n"));
    }
    out.push('\n');
}

fn render_bars(out: &mut String, heading: &str, rows: &[(String, u64)]) {
    render_heading(out, heading);

    let max = rows.iter().map(|(_, v)| *v).max().unwrap_or(0).max(1);
    let key_width = rows.iter().map(|(k, _)| k.chars().count()).max().unwrap_or(0);

    for (key, value) in rows {
        let bar = String::from(BAR_CHAR).repeat(bar_len(*value, max));
        let pad = key_width - key.chars().count();
        out.push_str(&format!(
            "{key}{}  {bar:<width$}  {value}\n",
            " ".repeat(pad),
            width = BAR_WIDTH
        ));
    }
    out.push('\n');
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn bar_len(value: u64, max: u64) -> usize {
    ((value as f64 / max as f64) * BAR_WIDTH as f64).round() as usize
}
