//! Timestamp formatting for the list and detail panes.
//!
//! All functions are pure; callers pass `now` so output is reproducible.
//! Dates are rendered in UTC, the same calendar used for day grouping.

use chrono::{DateTime, Utc};

const MINUTE_MS: i64 = 60 * 1000;
const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;

/// "Nm ago" under an hour, "Nh ago" under a day, else "Mar 4".
pub fn friendly_time(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff = (now - timestamp).num_milliseconds();

    if diff < HOUR_MS {
        let minutes = (diff as f64 / MINUTE_MS as f64).round() as i64;
        return format!("{}m ago", minutes.max(1));
    }
    if diff < DAY_MS {
        let hours = (diff as f64 / HOUR_MS as f64).round() as i64;
        return format!("{}h ago", hours);
    }
    timestamp.format("%b %-d").to_string()
}

/// Header label for a day group, e.g. "Mar 4, 2024"
pub fn day_label(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%b %-d, %Y").to_string()
}

/// Full date for the detail pane, e.g. "March 4, 2024 at 9:05 AM"
pub fn long_date(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%B %-d, %Y at %-I:%M %p").to_string()
}
