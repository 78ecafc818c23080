// SPDX-License-Identifier: MIT

//! Dashboard view: upcoming races plus per-day training analysis.

use crate::error::{AppError, Result};
use crate::models::{summarize_day, training_dates, ItemSummary};
use crate::routes::races::RaceView;
use crate::time_utils::is_valid_date_str;
use crate::AppState;
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// How many upcoming races the dashboard shows.
const UPCOMING_LIMIT: usize = 2;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/dashboard", get(get_dashboard))
}

#[derive(Deserialize)]
struct DashboardQuery {
    /// Day to analyze (YYYY-MM-DD); defaults to the most recent training day
    date: Option<String>,
}

#[derive(Serialize)]
pub struct DashboardResponse {
    /// Soonest upcoming races, at most two
    pub upcoming_races: Vec<RaceView>,
    /// How many upcoming races exist in total (for a "see more" link)
    pub upcoming_total: usize,
    /// Distinct training dates, most recent first
    pub dates: Vec<String>,
    /// The day the summaries cover; `None` when there is no training at all
    pub selected_date: Option<String>,
    /// Per-item statistics for the selected day
    pub items: Vec<ItemSummary>,
}

/// Get the dashboard: upcoming races, available days, and the selected
/// day's per-item summaries.
async fn get_dashboard(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DashboardQuery>,
) -> Result<Json<DashboardResponse>> {
    if let Some(date) = &params.date {
        if !is_valid_date_str(date) {
            return Err(AppError::BadRequest(
                "Invalid 'date' parameter: must be YYYY-MM-DD".to_string(),
            ));
        }
    }

    let data = state.store.snapshot();

    let mut upcoming: Vec<&crate::models::RaceRecord> =
        data.races.iter().filter(|r| r.is_upcoming).collect();
    let upcoming_total = upcoming.len();
    upcoming.sort_by(|a, b| a.date.cmp(&b.date));
    let upcoming_races = upcoming
        .into_iter()
        .take(UPCOMING_LIMIT)
        .map(RaceView::from_record)
        .collect();

    let dates = training_dates(&data.training);
    let selected_date = params.date.or_else(|| dates.first().cloned());

    let items = match &selected_date {
        Some(day) => summarize_day(&data.training, &data.items, day),
        None => Vec::new(),
    };

    tracing::debug!(
        date = ?selected_date,
        items = items.len(),
        "Dashboard computed"
    );

    Ok(Json(DashboardResponse {
        upcoming_races,
        upcoming_total,
        dates,
        selected_date,
        items,
    }))
}
