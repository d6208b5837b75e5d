//! JSON report writer.

use std::fs::File;
use std::io::Write;

use crate::core::stats::ChatStats;
use crate::error::ChatstatError;

/// Writes the statistics to a JSON file.
///
/// # Format
/// ```json
/// {
///   "from": "2023-01-01T09:00:00",
///   "to": "2023-01-02T21:15:00",
///   "total_messages": 3,
///   "per_user": [{"name": "Alice", "messages": 2, ...}],
///   "messages_per_hour": [0, 0, ...],
///   ...
/// }
/// ```
pub fn write_json(stats: &ChatStats, output_path: &str) -> Result<(), ChatstatError> {
    let mut file = File::create(output_path)?;
    file.write_all(to_json(stats)?.as_bytes())?;
    Ok(())
}

/// Converts the statistics to a pretty-printed JSON string.
pub fn to_json(stats: &ChatStats) -> Result<String, ChatstatError> {
    Ok(serde_json::to_string_pretty(stats)?)
}
