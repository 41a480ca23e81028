// ── List entry ──

use serde::{Deserialize, Serialize};

/// One row of the catalog list.
///
/// `name` comes from the listing, images and categories from the
/// per-item detail fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryEntry {
    pub name: String,
    pub front_image_url: Option<String>,
    pub back_image_url: Option<String>,
    /// Type names in the order the catalog listed them. May be empty.
    pub categories: Vec<String>,
}

impl SummaryEntry {
    /// First category, which drives the row's accent color.
    pub fn primary_category(&self) -> Option<&str> {
        self.categories.first().map(String::as_str)
    }
}
