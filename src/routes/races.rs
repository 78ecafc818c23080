// SPDX-License-Identifier: MIT

//! Race list view: search, filter, and race management.

use crate::error::{AppError, Result};
use crate::models::{Medal, RaceCategory, RaceRecord};
use crate::time_utils::is_valid_date_str;
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    routing::{delete, get},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/races", get(get_races).post(create_race))
        .route("/api/races/{id}", delete(delete_race))
}

/// A race as served to the list view: the record plus its derived medal.
#[derive(Debug, Clone, Serialize)]
pub struct RaceView {
    #[serde(flatten)]
    pub record: RaceRecord,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medal: Option<Medal>,
}

impl RaceView {
    pub fn from_record(record: &RaceRecord) -> Self {
        Self {
            medal: record.medal(),
            record: record.clone(),
        }
    }
}

#[derive(Deserialize)]
struct RacesQuery {
    /// Case-insensitive substring match on the race name
    search: Option<String>,
    /// Exact category match; absent means all categories
    category: Option<String>,
    /// Filter on the upcoming flag
    upcoming: Option<bool>,
}

#[derive(Serialize)]
pub struct RacesResponse {
    pub races: Vec<RaceView>,
    pub total: usize,
}

/// Get races, filtered by search term, category, and upcoming flag.
async fn get_races(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RacesQuery>,
) -> Result<Json<RacesResponse>> {
    let data = state.store.snapshot();

    let search = params.search.as_deref().unwrap_or("").to_lowercase();
    let category = params.category.as_deref();

    let races: Vec<RaceView> = data
        .races
        .iter()
        .filter(|race| {
            let matches_search = search.is_empty() || race.name.to_lowercase().contains(&search);
            let matches_category =
                category.is_none_or(|c| race.category.as_str() == c);
            let matches_upcoming = params.upcoming.is_none_or(|u| race.is_upcoming == u);
            matches_search && matches_category && matches_upcoming
        })
        .map(RaceView::from_record)
        .collect();

    let total = races.len();
    Ok(Json(RacesResponse { races, total }))
}

#[derive(Deserialize, Validate)]
struct NewRace {
    /// YYYY-MM-DD
    date: String,
    #[validate(length(min = 1, max = 100))]
    name: String,
    category: String,
    #[serde(default)]
    #[validate(length(max = 50))]
    rank: String,
    photo_url: Option<String>,
    #[serde(default)]
    is_upcoming: bool,
}

/// Record a race (past result or upcoming entry).
async fn create_race(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewRace>,
) -> Result<Json<RaceView>> {
    payload.validate()?;
    if !is_valid_date_str(&payload.date) {
        return Err(AppError::BadRequest(
            "Invalid 'date': must be YYYY-MM-DD".to_string(),
        ));
    }

    let record = RaceRecord {
        id: format!("r-{}", Uuid::new_v4()),
        date: payload.date,
        name: payload.name,
        category: RaceCategory::from(payload.category),
        rank: payload.rank,
        photo_url: payload.photo_url,
        is_upcoming: payload.is_upcoming,
    };

    tracing::info!(race_id = %record.id, name = %record.name, "Race recorded");

    let mut data = state.store.snapshot();
    data.races.push(record.clone());
    // The list view reads newest-first
    data.races.sort_by(|a, b| b.date.cmp(&a.date));
    state.store.replace(data)?;

    Ok(Json(RaceView::from_record(&record)))
}

#[derive(Serialize)]
pub struct DeletedResponse {
    pub deleted: String,
}

/// Delete a race by ID.
async fn delete_race(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<DeletedResponse>> {
    let mut data = state.store.snapshot();
    let before = data.races.len();
    data.races.retain(|r| r.id != id);

    if data.races.len() == before {
        return Err(AppError::NotFound(format!("Race {id} not found")));
    }

    state.store.replace(data)?;
    Ok(Json(DeletedResponse { deleted: id }))
}
