// ── Detail record ──

use serde::{Deserialize, Serialize};

/// Full view of a single catalog item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailRecord {
    pub id: u32,
    /// The identifier the record was requested with.
    pub name: String,
    pub height: u32,
    pub weight: u32,
    pub front_image_url: Option<String>,
    pub back_image_url: Option<String>,
    pub categories: Vec<String>,
    pub stats: Vec<Stat>,
}

impl DetailRecord {
    pub fn primary_category(&self) -> Option<&str> {
        self.categories.first().map(String::as_str)
    }

    /// Look up a stat by label (`"hp"`, `"speed"`, ...).
    pub fn stat(&self, label: &str) -> Option<u32> {
        self.stats.iter().find(|s| s.label == label).map(|s| s.value)
    }
}

/// A labelled base stat. Values are stored as reported, unclamped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: u32,
}
