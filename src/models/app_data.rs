// SPDX-License-Identifier: MIT

//! The aggregate: the entire persisted application state.

use serde::{Deserialize, Serialize};

use crate::models::{RaceRecord, SpeedTestItem, TrainingRecord};

/// Current persisted schema version. Version 0 is the original
/// un-versioned layout (the field absent entirely).
pub const SCHEMA_VERSION: u32 = 1;

/// The entire application state, held and replaced as one unit.
///
/// Every mutation is a whole-value replacement; there are no partial
/// updates and no merge semantics. Callers read-modify-write the full
/// aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppData {
    /// Persisted schema version; absent in pre-versioning documents.
    #[serde(default)]
    pub schema_version: u32,
    pub items: Vec<SpeedTestItem>,
    pub training: Vec<TrainingRecord>,
    pub races: Vec<RaceRecord>,
}

impl AppData {
    /// An empty aggregate at the current schema version.
    pub fn empty() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            items: Vec::new(),
            training: Vec::new(),
            races: Vec::new(),
        }
    }
}
