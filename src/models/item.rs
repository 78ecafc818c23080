// SPDX-License-Identifier: MIT

//! Speed-test item model (a named timed drill, e.g. "10m sprint").

use serde::{Deserialize, Serialize};

/// IDs of the built-in items that can never be deleted.
pub const PROTECTED_ITEM_IDS: [&str; 2] = ["10m", "30m"];

/// A named timed drill or course segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeedTestItem {
    /// Unique item ID (referenced by training records)
    pub id: String,
    /// Display name
    pub name: String,
    /// Whether the item is offered by default on the entry form
    pub is_default: bool,
}

impl SpeedTestItem {
    /// Whether this item is one of the built-ins that cannot be removed.
    pub fn is_protected(&self) -> bool {
        PROTECTED_ITEM_IDS.contains(&self.id.as_str())
    }
}
