//! Coarse relative-age formatting ("5m ago").

use chrono::{DateTime, Utc};

use crate::types::link::parse_timestamp;

/// Render the age of `timestamp` relative to `now` in its coarsest unit.
///
/// A missing or unparseable timestamp counts as `now`. The age is floored
/// at one second, so future timestamps render as `1s ago`.
pub fn time_ago(timestamp: Option<&str>, now: DateTime<Utc>) -> String {
    let then = timestamp.and_then(parse_timestamp).unwrap_or(now);
    let sec = ((now - then).num_milliseconds() / 1000).max(1);
    if sec < 60 {
        return format!("{sec}s ago");
    }
    let min = sec / 60;
    if min < 60 {
        return format!("{min}m ago");
    }
    let hrs = min / 60;
    if hrs < 24 {
        return format!("{hrs}h ago");
    }
    format!("{}d ago", hrs / 24)
}

/// [`time_ago`] against the current clock.
pub fn time_ago_now(timestamp: Option<&str>) -> String {
    time_ago(timestamp, Utc::now())
}
