// SPDX-License-Identifier: MIT

//! Training record model: one timed attempt at a speed-test item.

use serde::{Deserialize, Serialize};

/// Upper bound (seconds) accepted for a single attempt.
pub const MAX_SECONDS: f64 = 200.0;

/// One timed attempt at a speed-test item.
///
/// `date_str` is derived from `timestamp` once at creation and never
/// re-derived; it is the sole grouping key for day views. `item_id` may
/// dangle after the item is deleted, which is why `item_name` is a
/// snapshot taken at creation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingRecord {
    /// Unique record ID
    pub id: String,
    /// Epoch milliseconds
    pub timestamp: i64,
    /// YYYY-MM-DD grouping key
    pub date_str: String,
    /// References a `SpeedTestItem` ID (may dangle after deletion)
    pub item_id: String,
    /// Snapshot of the item name at creation
    pub item_name: String,
    /// Attempt time in seconds, in (0, 200]
    pub seconds: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Whether a time is storable: strictly positive, at most [`MAX_SECONDS`].
pub fn seconds_in_range(seconds: f64) -> bool {
    seconds.is_finite() && seconds > 0.0 && seconds <= MAX_SECONDS
}
