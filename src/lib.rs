// SPDX-License-Identifier: MIT

//! Bikelog: balance-bike training and race tracking.
//!
//! This crate provides the backend API for the single-page tracker:
//! lap-time logging for timed drills, race results, and per-day summary
//! statistics over the training history.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use db::DataStore;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub store: DataStore,
}
