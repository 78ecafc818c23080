// SPDX-License-Identifier: MIT

use bikelog::config::Config;
use bikelog::db::DataStore;
use bikelog::models::app_data::SCHEMA_VERSION;
use bikelog::models::{AppData, RaceCategory, RaceRecord, SpeedTestItem, TrainingRecord};
use bikelog::routes::create_router;
use bikelog::AppState;
use std::sync::Arc;

/// Create a test app over an in-memory store holding `data`.
#[allow(dead_code)]
pub fn create_test_app_with(data: AppData) -> (axum::Router, Arc<AppState>) {
    let state = Arc::new(AppState {
        config: Config::test_default(),
        store: DataStore::new_in_memory(data),
    });
    (create_router(state.clone()), state)
}

/// Create a test app over the standard fixture aggregate.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    create_test_app_with(fixture_data())
}

/// A small, fully deterministic aggregate used across the API tests.
#[allow(dead_code)]
pub fn fixture_data() -> AppData {
    AppData {
        schema_version: SCHEMA_VERSION,
        items: vec![
            item("10m", "10m 測速", true),
            item("30m", "30m 測速", true),
            item("pump", "波浪道單圈", false),
        ],
        training: vec![
            // Stored newest-first, like the entry flow leaves them
            training("t-5", 1_709_300_000_000, "2024-03-01", "10m", "10m 測速", 4.7),
            training("t-4", 1_709_299_000_000, "2024-03-01", "10m", "10m 測速", 4.3),
            training("t-3", 1_709_298_000_000, "2024-03-01", "10m", "10m 測速", 4.5),
            training("t-2", 1_709_297_000_000, "2024-03-01", "30m", "30m 測速", 12.4),
            training("t-1", 1_709_200_000_000, "2024-02-29", "10m", "10m 測速", 4.9),
        ],
        races: vec![
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
                date: "2024-05-01".to_string(),
                name: "春日挑戰賽".to_string(),
                category: RaceCategory::Obstacle,
                rank: String::new(),
                photo_url: None,
                is_upcoming: true,
            },
        ],
    }
}

#[allow(dead_code)]
pub fn item(id: &str, name: &str, is_default: bool) -> SpeedTestItem {
    SpeedTestItem {
        id: id.to_string(),
        name: name.to_string(),
        is_default,
    }
}

#[allow(dead_code)]
pub fn training(
    id: &str,
    timestamp: i64,
    date_str: &str,
    item_id: &str,
    item_name: &str,
    seconds: f64,
) -> TrainingRecord {
    TrainingRecord {
        id: id.to_string(),
        timestamp,
        date_str: date_str.to_string(),
        item_id: item_id.to_string(),
        item_name: item_name.to_string(),
        seconds,
        note: None,
    }
}

/// Read a response body as JSON.
#[allow(dead_code)]
pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("body is JSON")
}
