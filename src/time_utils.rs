// SPDX-License-Identifier: MIT

//! Shared helpers for date/time handling.

use chrono::{DateTime, Utc};

/// Format an epoch-milliseconds timestamp as a `YYYY-MM-DD` grouping key.
///
/// Returns `None` for timestamps outside chrono's representable range.
pub fn date_str_from_millis(millis: i64) -> Option<String> {
    DateTime::<Utc>::from_timestamp_millis(millis).map(|dt| dt.format("%Y-%m-%d").to_string())
}

/// Current time in epoch milliseconds.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Whether a string is a well-formed `YYYY-MM-DD` calendar date.
pub fn is_valid_date_str(s: &str) -> bool {
    chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
}

/// Midnight UTC of a `YYYY-MM-DD` date, in epoch milliseconds.
pub fn millis_at_midnight(date_str: &str) -> Option<i64> {
    let date = chrono::NaiveDate::parse_from_str(date_str, "%Y-%m-%d").ok()?;
    Some(
        date.and_hms_opt(0, 0, 0)?
            .and_utc()
            .timestamp_millis(),
    )
}
