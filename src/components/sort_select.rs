//! Sort Select Component

use leptos::logging::warn;
use leptos::prelude::*;

use crate::sort::SortType;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn SortSelect(#[prop(default = false)] include_added: bool) -> impl IntoView {
    let store = use_app_store();

    let on_change = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        match SortType::parse(&value) {
            Some(sort) => store.sort().set(sort),
            // unknown values leave the current ordering untouched
            None => warn!("Unknown sort type: {value}"),
        }
    };

    view! {
        <select
            id="sort-select"
            class="sort-select"
            prop:value=move || store.sort().get().as_str().to_string()
            on:change=on_change
        >
            <option value="newest">"新しい順"</option>
            <option value="oldest">"古い順"</option>
            <option value="featured">"おすすめ順"</option>
            {include_added.then(|| view! {
                <option value="added-newest">"追加が新しい順"</option>
                <option value="added-oldest">"追加が古い順"</option>
            })}
        </select>
    }
}
