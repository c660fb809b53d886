//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{CardEntry, Category};
use crate::sort::SortType;

/// Page-session state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Category metadata and serifu for the whole site
    pub categories: Vec<Category>,
    /// Cards shown on the current page
    pub entries: Vec<CardEntry>,
    /// Current search query
    pub query: String,
    /// Current sort order
    pub sort: SortType,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}
