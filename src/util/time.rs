//! Timestamp conversion helpers.
//!
//! The league platform publishes begin times, suggestions, and log times as
//! unix timestamps in seconds; persisted columns are naive UTC datetimes.

use chrono::{DateTime, NaiveDateTime};

/// Convert a unix timestamp in seconds to a naive UTC datetime.
///
/// Returns `None` for timestamps outside chrono's representable range, which
/// in practice means a corrupt payload field.
pub fn timestamp_to_naive(secs: i64) -> Option<NaiveDateTime> {
    DateTime::from_timestamp(secs, 0).map(|dt| dt.naive_utc())
}

/// Format a begin time the way messages display it.
pub fn format_begin(begin: NaiveDateTime) -> String {
    begin.format("%A, %d.%m.%Y %H:%M").to_string()
}
