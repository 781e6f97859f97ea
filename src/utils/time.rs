//! Time utilities: duration and epoch-millisecond formatting for display.

use chrono::{DateTime, Local};

/// Format a raw duration-in-seconds value as `HH:MM:SS`.
///
/// Hours are not wrapped at 24, so long calls render as e.g. `100:00:00`.
/// Anything that does not parse as a non-negative integer (empty, absent,
/// `NULL`, negative) falls back to `00:00:00`.
pub fn format_duration(raw: &str) -> String {
    let secs = raw.trim().parse::<u64>().unwrap_or(0);
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Format a raw epoch-milliseconds value as `YYYY-MM-DD HH:MM:SS` in the
/// host's local timezone.
///
/// Unparsable or out-of-range values fall back to 0 (the epoch), matching
/// the defaulting rule for absent fields.
pub fn format_epoch_millis(raw: &str) -> String {
    let millis = raw.trim().parse::<i64>().unwrap_or(0);
    let utc = DateTime::from_timestamp_millis(millis).unwrap_or_default();
    utc.with_timezone(&Local)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}
