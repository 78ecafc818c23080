//! Per-day training summaries for the dashboard.
//!
//! Everything here is descriptive statistics over small in-memory slices:
//! filter by day, partition by item, then count/best/mean/stability per
//! partition.

use serde::{Deserialize, Serialize};

use crate::models::{SpeedTestItem, TrainingRecord};

/// One point of the per-day pace chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LapPoint {
    /// Lap number within the day, starting at 1, in timestamp order
    pub idx: usize,
    pub seconds: f64,
}

/// Summary statistics for one item on one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemSummary {
    /// Item ID the partition was grouped on
    pub id: String,
    /// Current item name, or the raw ID if the item was deleted
    pub name: String,
    /// Number of attempts
    pub count: usize,
    /// Fastest time (minimum seconds)
    pub best: f64,
    /// Arithmetic mean of the times
    pub mean: f64,
    /// Population standard deviation (divisor n, not n-1)
    pub std_dev: f64,
    /// Chronologically ordered attempts for charting
    pub laps: Vec<LapPoint>,
}

/// Summarize one day of training, grouped per item.
///
/// Records are filtered on `date_str == day` and partitioned by `item_id`.
/// Output order is the insertion order of each item's first occurrence
/// within the filtered set; it is deliberately not sorted by name or
/// count, so the dashboard shows items in the order they were ridden.
///
/// An empty day yields an empty vec. A partition of size 1 yields a
/// standard deviation of 0.
pub fn summarize_day(
    records: &[TrainingRecord],
    items: &[SpeedTestItem],
    day: &str,
) -> Vec<ItemSummary> {
    // Partition while preserving first-occurrence order. The per-day record
    // count is small, so a linear scan per record beats a map here.
    let mut partitions: Vec<(&str, Vec<&TrainingRecord>)> = Vec::new();
    for record in records.iter().filter(|r| r.date_str == day) {
        match partitions.iter_mut().find(|(id, _)| *id == record.item_id) {
            Some((_, group)) => group.push(record),
            None => partitions.push((record.item_id.as_str(), vec![record])),
        }
    }

    partitions
        .into_iter()
        .map(|(item_id, mut group)| {
            let times: Vec<f64> = group.iter().map(|r| r.seconds).collect();
            let count = times.len();
            let best = times.iter().copied().fold(f64::INFINITY, f64::min);
            let mean = times.iter().sum::<f64>() / count as f64;
            let variance = times.iter().map(|t| (t - mean).powi(2)).sum::<f64>() / count as f64;

            let name = items
                .iter()
                .find(|i| i.id == item_id)
                .map_or_else(|| item_id.to_string(), |i| i.name.clone());

            group.sort_by_key(|r| r.timestamp);
            let laps = group
                .iter()
                .enumerate()
                .map(|(i, r)| LapPoint {
                    idx: i + 1,
                    seconds: r.seconds,
                })
                .collect();

            ItemSummary {
                id: item_id.to_string(),
                name,
                count,
                best,
                mean,
                std_dev: variance.sqrt(),
                laps,
            }
        })
        .collect()
}

/// Distinct training dates, sorted descending (most recent first).
pub fn training_dates(records: &[TrainingRecord]) -> Vec<String> {
    let mut dates: Vec<String> = Vec::new();
    for record in records {
        if !dates.iter().any(|d| *d == record.date_str) {
            dates.push(record.date_str.clone());
        }
    }
    dates.sort_by(|a, b| b.cmp(a));
    dates
}
