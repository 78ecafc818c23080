// SPDX-License-Identifier: MIT

//! Schema migrations for the persisted document.
//!
//! The document carries an explicit `schema_version`; version 0 is the
//! original un-versioned layout (field absent). Migrations are dispatched
//! by version and applied stepwise until the document reaches
//! [`SCHEMA_VERSION`].

use serde_json::Value;

use crate::models::app_data::SCHEMA_VERSION;
use crate::models::AppData;

/// Why a stored document could not be migrated. All variants degrade to
/// reseeding; none are surfaced to API callers.
#[derive(Debug, thiserror::Error)]
pub enum MigrateError {
    #[error("document is not a JSON object")]
    NotAnObject,

    #[error("version 0 document is missing the `items` field")]
    MissingItems,

    #[error("document version {0} is newer than this build supports")]
    FutureVersion(u32),

    #[error("document does not match the v{version} schema: {source}")]
    Shape {
        version: u32,
        #[source]
        source: serde_json::Error,
    },
}

type Migration = fn(Value) -> Result<Value, MigrateError>;

/// Dispatch table: the migration that lifts a document *from* each version.
const MIGRATIONS: &[(u32, Migration)] = &[(0, migrate_v0_to_v1)];

/// Migrate a raw stored document to the current schema and deserialize it.
pub fn migrate(mut doc: Value) -> Result<AppData, MigrateError> {
    let mut version = doc_version(&doc)?;
    if version > SCHEMA_VERSION {
        return Err(MigrateError::FutureVersion(version));
    }

    while version < SCHEMA_VERSION {
        let step = MIGRATIONS
            .iter()
            .find(|(from, _)| *from == version)
            .map(|(_, f)| f)
            .ok_or(MigrateError::FutureVersion(version))?;
        doc = step(doc)?;
        let next = doc_version(&doc)?;
        debug_assert!(next > version);
        version = next;
    }

    serde_json::from_value(doc).map_err(|source| MigrateError::Shape {
        version: SCHEMA_VERSION,
        source,
    })
}

fn doc_version(doc: &Value) -> Result<u32, MigrateError> {
    let obj = doc.as_object().ok_or(MigrateError::NotAnObject)?;
    Ok(obj
        .get("schema_version")
        .and_then(Value::as_u64)
        .unwrap_or(0) as u32)
}

/// v0 → v1: stamp the version field. A v0 document without `items` is the
/// original "corrupt or pre-seed" marker and is rejected so the caller
/// reseeds.
fn migrate_v0_to_v1(mut doc: Value) -> Result<Value, MigrateError> {
    let obj = doc.as_object_mut().ok_or(MigrateError::NotAnObject)?;
    if !obj.get("items").is_some_and(Value::is_array) {
        return Err(MigrateError::MissingItems);
    }
    obj.insert("schema_version".to_string(), Value::from(1u32));
    Ok(doc)
}
