// SPDX-License-Identifier: MIT

//! Seed dataset generation: deterministic shape, random values.
//!
//! Used whenever the storage slot is absent or unreadable, so a fresh
//! install (or a cleared slot) comes up with roughly the last 60 days of
//! plausible training plus a handful of sample races.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use crate::models::app_data::SCHEMA_VERSION;
use crate::models::{AppData, RaceCategory, RaceRecord, SpeedTestItem, TrainingRecord};

/// How many days back the seed covers.
const SEED_DAYS_BACK: i64 = 60;
/// Chance that a given seed day has any training at all.
const TRAINED_DAY_PROBABILITY: f64 = 0.7;

/// The default speed-test items seeded on first run.
pub fn default_items() -> Vec<SpeedTestItem> {
    vec![
        SpeedTestItem {
            id: "10m".to_string(),
            name: "10m 測速".to_string(),
            is_default: true,
        },
        SpeedTestItem {
            id: "30m".to_string(),
            name: "30m 測速".to_string(),
            is_default: true,
        },
        SpeedTestItem {
            id: "pump".to_string(),
            name: "波浪道單圈".to_string(),
            is_default: false,
        },
    ]
}

/// Generate the full seed aggregate, anchored at `now`.
pub fn generate_seed_data(now: DateTime<Utc>) -> AppData {
    let mut rng = rand::rng();
    let items = default_items();
    let mut training: Vec<TrainingRecord> = Vec::new();

    for days_ago in 0..SEED_DAYS_BACK {
        let day = now - Duration::days(days_ago);
        let date_str = day.format("%Y-%m-%d").to_string();
        // Anchor sessions at 08:00 so lap offsets never cross midnight and
        // date_str always agrees with timestamp.
        let day_millis = match day.date_naive().and_hms_opt(8, 0, 0) {
            Some(start) => start.and_utc().timestamp_millis(),
            None => day.timestamp_millis(),
        };

        if !rng.random_bool(TRAINED_DAY_PROBABILITY) {
            continue;
        }

        // 10m: 10-19 laps around 4.2-5.7s, one a minute
        let laps_10m = rng.random_range(10..20);
        for lap in 0..laps_10m {
            let seconds = round4(4.2 + rng.random_range(0.0..1.5));
            training.push(TrainingRecord {
                id: format!("t-{date_str}-10m-{lap}"),
                timestamp: day_millis + lap * 60_000,
                date_str: date_str.clone(),
                item_id: "10m".to_string(),
                item_name: "10m 測速".to_string(),
                seconds,
                note: None,
            });
        }

        // 30m: 5-14 laps around 11.5-14.0s, starting an hour later
        let laps_30m = rng.random_range(5..15);
        for lap in 0..laps_30m {
            let seconds = round4(11.5 + rng.random_range(0.0..2.5));
            training.push(TrainingRecord {
                id: format!("t-{date_str}-30m-{lap}"),
                timestamp: day_millis + lap * 120_000 + 3_600_000,
                date_str: date_str.clone(),
                item_id: "30m".to_string(),
                item_name: "30m 測速".to_string(),
                seconds,
                note: None,
            });
        }
    }

    training.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    let mut races = sample_races();
    races.sort_by(|a, b| b.date.cmp(&a.date));

    AppData {
        schema_version: SCHEMA_VERSION,
        items,
        training,
        races,
    }
}

/// Fixed sample races: three past results and two upcoming entries.
fn sample_races() -> Vec<RaceRecord> {
    vec![
        RaceRecord {
            id: "r1".to_string(),
            date: "2023-12-15".to_string(),
            name: "聖誕盃滑步車大賽".to_string(),
            category: RaceCategory::Sprint,
            rank: "冠軍".to_string(),
            photo_url: None,
            is_upcoming: false,
        },
        RaceRecord {
            id: "r2".to_string(),
            date: "2024-01-20".to_string(),
            name: "新年極速挑戰賽".to_string(),
            category: RaceCategory::PumpTrack,
            rank: "季軍".to_string(),
            photo_url: None,
            is_upcoming: false,
        },
        RaceRecord {
            id: "r3".to_string(),
            date: "2024-02-10".to_string(),
            name: "春季聯賽".to_string(),
            category: RaceCategory::Sprint,
            rank: "第5名".to_string(),
            photo_url: None,
            is_upcoming: false,
        },
        RaceRecord {
            id: "r_future_1".to_string(),
            date: "2024-06-15".to_string(),
            name: "全國菁英盃".to_string(),
            category: RaceCategory::Sprint,
            rank: String::new(),
            photo_url: None,
            is_upcoming: true,
        },
        RaceRecord {
            id: "r_future_2".to_string(),
            date: "2024-07-01".to_string(),
            name: "暑期大獎賽".to_string(),
            category: RaceCategory::Obstacle,
            rank: String::new(),
            photo_url: None,
            is_upcoming: true,
        },
    ]
}

fn round4(seconds: f64) -> f64 {
    (seconds * 10_000.0).round() / 10_000.0
}
