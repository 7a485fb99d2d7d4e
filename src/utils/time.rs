//! Time and timestamp utilities

use chrono::{DateTime, Local};

/// Format used for mutation log lines, e.g. `2024-03-01T09:15:02.123456`
pub const LOG_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Current local time as an ISO-8601 string without offset
pub fn now_iso() -> String {
    format_timestamp(&Local::now())
}

/// Format a timestamp for log lines
pub fn format_timestamp(ts: &DateTime<Local>) -> String {
    ts.format(LOG_TIMESTAMP_FORMAT).to_string()
}
