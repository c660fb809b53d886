//! Domain Models
//!
//! Data structures matching the category data document and the
//! persisted favorites record.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One displayable text card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Serifu {
    /// Globally unique, "<category>-<NNN>"
    pub id: String,
    pub text: String,
    /// ISO date (YYYY-MM-DD), lexically sortable
    pub created_at: String,
    #[serde(default)]
    pub featured: bool,
}

/// A named grouping of serifu, also used as a routing segment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub description: String,
    pub serifu: Vec<Serifu>,
}

/// The whole categories.json document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoriesData {
    pub categories: Vec<Category>,
}

/// Persisted favorites record: serifu id -> added timestamp (ms since epoch)
pub type FavoritesData = HashMap<String, i64>;

/// One card in a rendered list, with the category it belongs to and,
/// on the favorites page, the timestamp it was added
#[derive(Debug, Clone, PartialEq)]
pub struct CardEntry {
    pub serifu: Serifu,
    pub category: String,
    pub added_at: Option<i64>,
}

/// LocalStorage keys
pub mod storage_keys {
    pub const FAVORITES_DATA: &str = "favoritesData";
    pub const FAVORITE_NOTICE_SEEN: &str = "favorite-notice-seen";
    pub const SCROLL_TO_SERIFU: &str = "scroll-to-serifu";
}
