//! Search Bar Component
//!
//! Binds the page query and shows how many cards remain visible.

use leptos::prelude::*;

use crate::search;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn SearchBar() -> impl IntoView {
    let store = use_app_store();

    let visible_count = Memo::new(move |_| {
        let query = store.query().get();
        store
            .entries()
            .get()
            .iter()
            .filter(|entry| search::matches(&entry.serifu.text, &query))
            .count()
    });

    view! {
        <div class="search-box">
            <input
                id="search-input"
                type="search"
                class="search-input"
                placeholder="セリフを検索..."
                prop:value=move || store.query().get()
                on:input=move |ev| store.query().set(event_target_value(&ev))
            />
            <span id="search-result-count" class="search-result-count">
                {move || format!("{} 件", visible_count.get())}
            </span>
        </div>
    }
}
