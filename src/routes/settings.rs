// SPDX-License-Identifier: MIT

//! Configuration view: item management, CSV import, and export.

use crate::error::{AppError, Result};
use crate::models::{AppData, SpeedTestItem};
use crate::services::import::parse_training_csv;
use crate::AppState;
use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/items", get(get_items).post(create_item))
        .route("/api/items/{id}", delete(delete_item))
        .route("/api/items/{id}/default", put(toggle_default))
        .route("/api/import", post(import_csv))
        .route("/api/export", get(export_data))
}

#[derive(Serialize)]
pub struct ItemsResponse {
    pub items: Vec<SpeedTestItem>,
}

/// List the configured speed-test items.
async fn get_items(State(state): State<Arc<AppState>>) -> Result<Json<ItemsResponse>> {
    Ok(Json(ItemsResponse {
        items: state.store.snapshot().items,
    }))
}

#[derive(Deserialize, Validate)]
struct NewItem {
    #[validate(length(min = 1, max = 50))]
    name: String,
}

/// Add a custom speed-test item.
async fn create_item(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewItem>,
) -> Result<Json<SpeedTestItem>> {
    payload.validate()?;
    let name = payload.name.trim().to_string();
    if name.is_empty() {
        return Err(AppError::BadRequest("Item name must not be blank".to_string()));
    }

    let item = SpeedTestItem {
        id: format!("custom-{}", Uuid::new_v4()),
        name,
        is_default: false,
    };

    let mut data = state.store.snapshot();
    data.items.push(item.clone());
    state.store.replace(data)?;

    tracing::info!(item_id = %item.id, name = %item.name, "Item added");
    Ok(Json(item))
}

#[derive(Serialize)]
pub struct DeletedResponse {
    pub deleted: String,
}

/// Delete a speed-test item.
///
/// Training records referencing the item are left exactly as they are:
/// they keep their own name snapshot, and their `item_id` is allowed to
/// dangle. The built-in 10m/30m items cannot be deleted.
async fn delete_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<DeletedResponse>> {
    let mut data = state.store.snapshot();

    let item = data
        .items
        .iter()
        .find(|i| i.id == id)
        .ok_or_else(|| AppError::NotFound(format!("Item {id} not found")))?;

    if item.is_protected() {
        return Err(AppError::BadRequest(format!(
            "Item {id} is built in and cannot be deleted"
        )));
    }

    data.items.retain(|i| i.id != id);
    state.store.replace(data)?;

    Ok(Json(DeletedResponse { deleted: id }))
}

/// Toggle whether an item is offered by default on the entry form.
async fn toggle_default(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<SpeedTestItem>> {
    let mut data = state.store.snapshot();

    let item = data
        .items
        .iter_mut()
        .find(|i| i.id == id)
        .ok_or_else(|| AppError::NotFound(format!("Item {id} not found")))?;
    item.is_default = !item.is_default;
    let updated = item.clone();

    state.store.replace(data)?;
    Ok(Json(updated))
}

#[derive(Serialize)]
pub struct ImportResponse {
    pub imported: usize,
    pub skipped: usize,
}

/// Import training records from a CSV document (`Date,Item,Seconds,Note`).
///
/// Bad rows are dropped, never corrected; the response reports both
/// counts so the user can tell a partial import from a clean one.
async fn import_csv(
    State(state): State<Arc<AppState>>,
    body: String,
) -> Result<Json<ImportResponse>> {
    let mut data = state.store.snapshot();

    if data.items.is_empty() {
        return Err(AppError::BadRequest(
            "No speed-test items configured; nothing to import against".to_string(),
        ));
    }

    let report = parse_training_csv(&data.items, &body);

    if report.imported > 0 {
        data.training.extend(report.records);
        state.store.replace(data)?;
    }

    Ok(Json(ImportResponse {
        imported: report.imported,
        skipped: report.skipped,
    }))
}

/// Export the full aggregate as JSON (the user's backup path).
async fn export_data(State(state): State<Arc<AppState>>) -> Json<AppData> {
    Json(state.store.snapshot())
}
