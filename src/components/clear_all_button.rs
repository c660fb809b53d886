//! Clear All Button Component
//!
//! Inline confirmation before clearing every favorite.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::favorites;
use crate::toast::use_toasts;

#[component]
pub fn ClearAllButton() -> impl IntoView {
    let ctx = use_app_context();
    let toasts = use_toasts();
    let (confirming, set_confirming) = signal(false);

    view! {
        <Show when=move || !confirming.get()>
            <button
                id="clear-all-btn"
                class="clear-all-btn"
                on:click=move |_| set_confirming.set(true)
            >
                "すべて削除"
            </button>
        </Show>
        <Show when=move || confirming.get()>
            <span class="clear-all-confirm">
                <span class="clear-all-confirm-text">"全て削除しますか?"</span>
                <button
                    class="confirm-btn"
                    on:click=move |_| {
                        set_confirming.set(false);
                        favorites::store_for(ctx).clear_all();
                        toasts.success(Some("お気に入りをクリアしました"));
                    }
                >
                    "✓"
                </button>
                <button class="cancel-btn" on:click=move |_| set_confirming.set(false)>
                    "✗"
                </button>
            </span>
        </Show>
    }
}
