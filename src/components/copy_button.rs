//! Copy Button Component
//!
//! Copies the shareable link for one serifu, flipping to a check mark
//! while the copy is fresh.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::clipboard;
use crate::toast::use_toasts;

const COPIED_FEEDBACK_MS: u32 = 2000;

#[component]
pub fn CopyButton(serifu_id: String, category: String) -> impl IntoView {
    let toasts = use_toasts();
    let (copied, set_copied) = signal(false);
    let id = StoredValue::new(serifu_id);
    let category = StoredValue::new(category);

    let on_click = move |ev: web_sys::MouseEvent| {
        // never let the enclosing card see this press
        ev.stop_propagation();

        spawn_local(async move {
            let ok =
                clipboard::copy_serifu_url(&id.get_value(), &category.get_value(), toasts).await;
            if ok {
                set_copied.set(true);
                Timeout::new(COPIED_FEEDBACK_MS, move || set_copied.set(false)).forget();
            }
        });
    };

    view! {
        <button
            class=move || {
                if copied.get() {
                    "copy-btn action-button p-2 rounded-full transition-all duration-200 copied"
                } else {
                    "copy-btn action-button p-2 rounded-full transition-all duration-200"
                }
            }
            aria-label="リンクをコピー"
            data-serifu-id=id.get_value()
            data-category=category.get_value()
            on:click=on_click
        >
            {move || if copied.get() { "✅" } else { "🔗" }}
        </button>
    }
}
