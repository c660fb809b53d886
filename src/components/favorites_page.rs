//! Favorites Page
//!
//! The list derives from the persisted record and resyncs on every
//! favorites change, so the count, the empty state, and the clear-all
//! button always reflect what is stored.

use leptos::prelude::*;

use crate::components::{ClearAllButton, EmptyState, SearchBar, SerifuList, SortSelect};
use crate::context::use_app_context;
use crate::favorites;
use crate::sort::SortType;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn FavoritesPage() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let load_entries = move || {
        store.categories().with_untracked(|categories| {
            favorites::favorite_entries(categories, &favorites::favorites_record())
        })
    };

    store.entries().set(load_entries());
    store.sort().set(SortType::Newest);

    Effect::new(move |_| {
        ctx.favorites_version.get();
        store.entries().set(load_entries());
    });

    let count = Memo::new(move |_| store.entries().with(|entries| entries.len()));

    view! {
        <section class="page favorites-page">
            <h1 class="page-title">"❤️ お気に入り"</h1>
            <div class="favorites-toolbar">
                <span id="favorite-count" class="favorite-count">
                    {move || format!("全 {} 件", count.get())}
                </span>
                <Show when=move || (count.get() > 0)>
                    <ClearAllButton />
                </Show>
            </div>
            <Show when=move || (count.get() > 0) fallback=|| view! { <EmptyState /> }>
                <div class="list-controls">
                    <SearchBar />
                    <SortSelect include_added=true />
                </div>
                <SerifuList />
            </Show>
        </section>
    }
}
