// SPDX-License-Identifier: MIT

//! The record store: the in-memory aggregate plus its one-slot JSON
//! persistence.
//!
//! Reads hand out a clone of the aggregate; every mutation is a total
//! replacement with synchronous write-through. There is no merge, no
//! partial update, and no queue; last writer wins.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

use crate::db::{migrate, seed};
use crate::error::AppError;
use crate::models::app_data::SCHEMA_VERSION;
use crate::models::AppData;

/// Holds the aggregate and writes it through to a single JSON file slot.
#[derive(Debug)]
pub struct DataStore {
    data: RwLock<AppData>,
    /// Backing file; `None` keeps the store purely in memory (tests).
    path: Option<PathBuf>,
}

impl DataStore {
    /// Open the store at `path`, loading the persisted document.
    ///
    /// An absent file, a parse failure, or a version-0 document missing
    /// `items` all fall back to a freshly generated seed dataset, which is
    /// persisted before being returned. Load never fails for data reasons;
    /// only I/O errors on the seed write surface.
    pub fn open(path: &Path) -> Result<Self, AppError> {
        let data = match load_slot(path) {
            Some(data) => data,
            None => {
                let seeded = seed::generate_seed_data(chrono::Utc::now());
                tracing::info!(
                    path = %path.display(),
                    training = seeded.training.len(),
                    "Seeding fresh dataset"
                );
                write_slot(path, &seeded)?;
                seeded
            }
        };

        Ok(Self {
            data: RwLock::new(data),
            path: Some(path.to_path_buf()),
        })
    }

    /// In-memory store for tests: no file slot, no write-through target.
    pub fn new_in_memory(data: AppData) -> Self {
        Self {
            data: RwLock::new(data),
            path: None,
        }
    }

    /// A clone of the current aggregate.
    pub fn snapshot(&self) -> AppData {
        self.data
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replace the whole aggregate and write it through.
    ///
    /// The file is written before the in-memory value is swapped, so a
    /// failed write leaves the previous aggregate visible.
    pub fn replace(&self, mut new_data: AppData) -> Result<(), AppError> {
        new_data.schema_version = SCHEMA_VERSION;

        let mut guard = self.data.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(path) = &self.path {
            write_slot(path, &new_data)?;
        }
        *guard = new_data;
        Ok(())
    }
}

/// Read and migrate the slot. `None` means "reseed": absent file, parse
/// failure, or unmigratable document. Failures are logged, never returned.
fn load_slot(path: &Path) -> Option<AppData> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::info!(path = %path.display(), "No stored data found");
            return None;
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "Failed to read stored data");
            return None;
        }
    };

    let doc: serde_json::Value = match serde_json::from_str(&raw) {
        Ok(doc) => doc,
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "Stored data is not valid JSON");
            return None;
        }
    };

    match migrate::migrate(doc) {
        Ok(data) => Some(data),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "Stored data could not be migrated");
            None
        }
    }
}

/// Serialize the aggregate and overwrite the slot.
///
/// Writes to a sibling temp file and renames it into place, so a crash
/// mid-write never truncates the previous document.
fn write_slot(path: &Path, data: &AppData) -> Result<(), AppError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| AppError::Storage(format!("create {}: {e}", parent.display())))?;
        }
    }

    let json = serde_json::to_vec_pretty(data)
        .map_err(|e| AppError::Storage(format!("serialize aggregate: {e}")))?;

    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, &json)
        .map_err(|e| AppError::Storage(format!("write {}: {e}", tmp.display())))?;
    fs::rename(&tmp, path)
        .map_err(|e| AppError::Storage(format!("rename into {}: {e}", path.display())))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SpeedTestItem, TrainingRecord};

    fn temp_slot(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "bikelog-store-{tag}-{}.json",
            std::process::id()
        ))
    }

    fn tiny_aggregate() -> AppData {
        AppData {
            schema_version: SCHEMA_VERSION,
            items: vec![SpeedTestItem {
                id: "10m".to_string(),
                name: "10m 測速".to_string(),
                is_default: true,
            }],
            training: vec![TrainingRecord {
                id: "t-1".to_string(),
                timestamp: 1_709_296_200_000,
                date_str: "2024-03-01".to_string(),
                item_id: "10m".to_string(),
                item_name: "10m 測速".to_string(),
                seconds: 4.5,
                note: Some("windy".to_string()),
            }],
            races: vec![],
        }
    }

    #[test]
    fn test_open_absent_slot_seeds_and_persists() {
        let path = temp_slot("seed");
        let _ = fs::remove_file(&path);

        let store = DataStore::open(&path).unwrap();
        let data = store.snapshot();
        assert!(!data.training.is_empty());
        assert_eq!(data.items.len(), 3);

        // Seed was written through: reopening loads the same aggregate.
        let reopened = DataStore::open(&path).unwrap();
        assert_eq!(reopened.snapshot(), data);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_save_load_round_trip_is_byte_stable() {
        let path = temp_slot("roundtrip");
        let _ = fs::remove_file(&path);

        let store = DataStore::open(&path).unwrap();
        let first_bytes = fs::read(&path).unwrap();

        // Persist freshly loaded data again; the document must not change.
        store.replace(store.snapshot()).unwrap();
        let second_bytes = fs::read(&path).unwrap();
        assert_eq!(first_bytes, second_bytes);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_corrupt_slot_falls_back_to_seed() {
        let path = temp_slot("corrupt");
        fs::write(&path, b"{not json at all").unwrap();

        let store = DataStore::open(&path).unwrap();
        assert!(!store.snapshot().training.is_empty());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_v0_slot_missing_items_is_reseeded() {
        let path = temp_slot("noitems");
        fs::write(&path, br#"{"training": [], "races": []}"#).unwrap();

        let store = DataStore::open(&path).unwrap();
        let data = store.snapshot();
        assert_eq!(data.items.len(), 3);
        assert_eq!(data.schema_version, SCHEMA_VERSION);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_replace_writes_through() {
        let path = temp_slot("replace");
        let _ = fs::remove_file(&path);

        let store = DataStore::open(&path).unwrap();
        store.replace(tiny_aggregate()).unwrap();
        assert_eq!(store.snapshot(), tiny_aggregate());

        let reopened = DataStore::open(&path).unwrap();
        assert_eq!(reopened.snapshot(), tiny_aggregate());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_replace_stamps_schema_version() {
        let store = DataStore::new_in_memory(AppData::empty());
        let mut data = tiny_aggregate();
        data.schema_version = 0;

        store.replace(data).unwrap();
        assert_eq!(store.snapshot().schema_version, SCHEMA_VERSION);
    }
}
