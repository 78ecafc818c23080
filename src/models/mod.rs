// SPDX-License-Identifier: MIT

//! Data models for the application.

pub mod app_data;
pub mod item;
pub mod race;
pub mod stats;
pub mod training;

pub use app_data::AppData;
pub use item::SpeedTestItem;
pub use race::{Medal, RaceCategory, RaceRecord};
pub use stats::{summarize_day, training_dates, ItemSummary, LapPoint};
pub use training::TrainingRecord;
