// SPDX-License-Identifier: MIT

//! Race record model: a past or upcoming competitive event entry.

use serde::{Deserialize, Serialize};

/// Race category. Unknown strings round-trip via `Other`-style passthrough:
/// the serde representation is the raw category string, so free-text
/// categories entered by the user survive persistence untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RaceCategory {
    /// 個人競速 (individual sprint)
    Sprint,
    /// 團體接力 (team relay)
    Relay,
    /// 障礙賽 (obstacle course)
    Obstacle,
    /// 波浪道 (pump track)
    PumpTrack,
    /// 其他 (other)
    Other,
    /// Free-text category not in the built-in set
    Custom(String),
}

impl RaceCategory {
    pub fn as_str(&self) -> &str {
        match self {
            RaceCategory::Sprint => "個人競速",
            RaceCategory::Relay => "團體接力",
            RaceCategory::Obstacle => "障礙賽",
            RaceCategory::PumpTrack => "波浪道",
            RaceCategory::Other => "其他",
            RaceCategory::Custom(s) => s,
        }
    }

    /// The built-in categories, in display order.
    pub fn builtin() -> [RaceCategory; 5] {
        [
            RaceCategory::Sprint,
            RaceCategory::Relay,
            RaceCategory::Obstacle,
            RaceCategory::PumpTrack,
            RaceCategory::Other,
        ]
    }
}

impl From<String> for RaceCategory {
    fn from(s: String) -> Self {
        match s.as_str() {
            "個人競速" => RaceCategory::Sprint,
            "團體接力" => RaceCategory::Relay,
            "障礙賽" => RaceCategory::Obstacle,
            "波浪道" => RaceCategory::PumpTrack,
            "其他" => RaceCategory::Other,
            _ => RaceCategory::Custom(s),
        }
    }
}

impl From<RaceCategory> for String {
    fn from(c: RaceCategory) -> Self {
        c.as_str().to_string()
    }
}

/// Medal class derived from a free-text rank.
///
/// The persisted `rank` stays free text for data compatibility; the API
/// carries this derived value so clients do not re-run substring matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

impl Medal {
    /// Heuristic classification of a free-text rank string.
    ///
    /// Matches the digits 1/2/3 or the champion/runner-up/third-place
    /// characters (冠/亞/季) anywhere in the string. First match wins,
    /// checked in gold → silver → bronze order.
    pub fn from_rank(rank: &str) -> Option<Medal> {
        if rank.contains('1') || rank.contains('冠') {
            Some(Medal::Gold)
        } else if rank.contains('2') || rank.contains('亞') {
            Some(Medal::Silver)
        } else if rank.contains('3') || rank.contains('季') {
            Some(Medal::Bronze)
        } else {
            None
        }
    }
}

/// A past or upcoming competitive event entry.
///
/// `is_upcoming` and `date` are independently settable; nothing enforces
/// that upcoming races have future dates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceRecord {
    pub id: String,
    /// YYYY-MM-DD
    pub date: String,
    pub name: String,
    pub category: RaceCategory,
    /// Free-text result, e.g. "冠軍", "第5名", "小組賽"
    pub rank: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    pub is_upcoming: bool,
}

impl RaceRecord {
    /// Derived medal class for display.
    pub fn medal(&self) -> Option<Medal> {
        Medal::from_rank(&self.rank)
    }
}
