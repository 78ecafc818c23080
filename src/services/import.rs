// SPDX-License-Identifier: MIT

//! Bulk CSV import of training records.
//!
//! Format: `Date,Item,Seconds,Note` with the first line treated as a
//! header and discarded. Malformed rows and out-of-range times are
//! silently skipped; the report carries the counts. Item names match
//! exactly (case-sensitive) against the configured items, falling back to
//! the first configured item on no match.

use serde::Serialize;
use uuid::Uuid;

use crate::models::training::seconds_in_range;
use crate::models::{SpeedTestItem, TrainingRecord};
use crate::time_utils::{is_valid_date_str, millis_at_midnight};

/// Outcome of one CSV import pass.
#[derive(Debug, Serialize)]
pub struct ImportReport {
    /// Parsed records, in row order, ready to append to the aggregate
    #[serde(skip)]
    pub records: Vec<TrainingRecord>,
    pub imported: usize,
    pub skipped: usize,
}

/// Parse a CSV document into training records.
///
/// Never fails: unreadable rows only increment `skipped`. The caller is
/// responsible for appending `records` to the aggregate and persisting.
pub fn parse_training_csv(items: &[SpeedTestItem], text: &str) -> ImportReport {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let mut records = Vec::new();
    let mut skipped = 0;

    for (row_idx, row) in reader.records().enumerate() {
        let row = match row {
            Ok(row) => row,
            Err(err) => {
                tracing::debug!(row = row_idx, error = %err, "Skipping unreadable CSV row");
                skipped += 1;
                continue;
            }
        };

        match parse_row(items, &row, row_idx) {
            Some(record) => records.push(record),
            None => skipped += 1,
        }
    }

    let imported = records.len();
    tracing::info!(imported, skipped, "CSV import parsed");

    ImportReport {
        records,
        imported,
        skipped,
    }
}

fn parse_row(
    items: &[SpeedTestItem],
    row: &csv::StringRecord,
    row_idx: usize,
) -> Option<TrainingRecord> {
    let date = row.get(0)?.trim();
    let item_name = row.get(1)?.trim();
    let seconds: f64 = row.get(2)?.trim().parse().ok()?;

    if !is_valid_date_str(date) || !seconds_in_range(seconds) {
        return None;
    }

    // Exact, case-sensitive name match; no match falls back to the first
    // configured item.
    let matched = items.iter().find(|i| i.name == item_name).or_else(|| items.first())?;

    let note = row
        .get(3)
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(String::from);

    // Midnight UTC plus the row index, so same-day rows keep their file
    // order in the lap chart. date_str is taken verbatim from the CSV.
    let timestamp = millis_at_midnight(date)? + row_idx as i64;

    Some(TrainingRecord {
        id: format!("imp-{}", Uuid::new_v4()),
        timestamp,
        date_str: date.to_string(),
        item_id: matched.id.clone(),
        item_name: if item_name.is_empty() {
            matched.name.clone()
        } else {
            item_name.to_string()
        },
        seconds,
        note,
    })
}
