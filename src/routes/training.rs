// SPDX-License-Identifier: MIT

//! Rapid data-entry view: record and delete timed attempts.

use crate::error::{AppError, Result};
use crate::models::TrainingRecord;
use crate::time_utils::{date_str_from_millis, now_millis};
use crate::AppState;
use axum::{
    extract::{Path, State},
    routing::{delete, post},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/training", post(create_training))
        .route("/api/training/{id}", delete(delete_training))
}

#[derive(Deserialize, Validate)]
struct NewTrainingRecord {
    item_id: String,
    /// Attempt time in seconds; must be in (0, 200]
    #[validate(range(exclusive_min = 0.0, max = 200.0))]
    seconds: f64,
    note: Option<String>,
}

/// Record one timed attempt.
///
/// The server assigns the ID, timestamp, grouping date, and the item name
/// snapshot; the new record is prepended so the training list stays
/// newest-first.
async fn create_training(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewTrainingRecord>,
) -> Result<Json<TrainingRecord>> {
    payload.validate().map_err(|_| {
        AppError::Validation("seconds must be greater than 0 and at most 200".to_string())
    })?;

    let mut data = state.store.snapshot();

    let item = data
        .items
        .iter()
        .find(|i| i.id == payload.item_id)
        .ok_or_else(|| AppError::BadRequest(format!("Unknown item: {}", payload.item_id)))?;

    let timestamp = now_millis();
    let record = TrainingRecord {
        id: format!("t-{}", Uuid::new_v4()),
        timestamp,
        date_str: date_str_from_millis(timestamp)
            .ok_or_else(|| AppError::Internal(anyhow::anyhow!("clock out of range")))?,
        item_id: item.id.clone(),
        item_name: item.name.clone(),
        seconds: (payload.seconds * 10_000.0).round() / 10_000.0,
        note: payload.note.filter(|n| !n.is_empty()),
    };

    tracing::info!(
        record_id = %record.id,
        item = %record.item_id,
        seconds = record.seconds,
        "Training record saved"
    );

    data.training.insert(0, record.clone());
    state.store.replace(data)?;

    Ok(Json(record))
}

#[derive(serde::Serialize)]
pub struct DeletedResponse {
    pub deleted: String,
}

/// Delete a training record by ID.
async fn delete_training(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<DeletedResponse>> {
    let mut data = state.store.snapshot();
    let before = data.training.len();
    data.training.retain(|t| t.id != id);

    if data.training.len() == before {
        return Err(AppError::NotFound(format!("Training record {id} not found")));
    }

    state.store.replace(data)?;
    Ok(Json(DeletedResponse { deleted: id }))
}
