//! Category Page
//!
//! All serifu of one category, oldest first. Long press is disabled
//! here; this page is the navigation target, so it restores a pending
//! scroll target (or URL fragment) after load instead.

use leptos::logging::warn;
use leptos::prelude::*;

use crate::components::{SearchBar, SerifuList, SortSelect};
use crate::models::CardEntry;
use crate::scroll;
use crate::sort::SortType;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn CategoryPage(category_id: String) -> impl IntoView {
    let store = use_app_store();

    let category = store.categories().with_untracked(|categories| {
        categories
            .iter()
            .find(|category| category.id == category_id)
            .cloned()
    });
    if category.is_none() {
        warn!("Unknown category: {category_id}");
    }

    let entries: Vec<CardEntry> = category
        .as_ref()
        .map(|category| {
            category
                .serifu
                .iter()
                .map(|serifu| CardEntry {
                    serifu: serifu.clone(),
                    category: category.id.clone(),
                    added_at: None,
                })
                .collect()
        })
        .unwrap_or_default();
    store.entries().set(entries);
    store.sort().set(SortType::Oldest);

    Effect::new(move |_| {
        scroll::restore_scroll_target();
    });

    let heading = category
        .as_ref()
        .map(|category| format!("{} {}", category.icon, category.name))
        .unwrap_or_else(|| category_id.clone());
    let description = category.as_ref().map(|category| category.description.clone());

    view! {
        <section class="page category-page">
            <h1 class="page-title">{heading}</h1>
            {description.map(|text| view! { <p class="category-description">{text}</p> })}
            <div class="list-controls">
                <SearchBar />
                <SortSelect />
            </div>
            <SerifuList long_press_enabled=false />
        </section>
    }
}
