//! Serifu List Component
//!
//! Sorted, searchable card list. Each card sits in a wrapper carrying
//! the sortable/searchable data attributes; search toggles visibility
//! while sorting reorders with a staged reveal.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::components::SerifuCard;
use crate::dom;
use crate::search;
use crate::sort;
use crate::store::{use_app_store, AppStateStoreFields};

/// Per-card delay of the cascading reveal
const REVEAL_STAGGER_MS: u32 = 30;

#[component]
pub fn SerifuList(#[prop(default = true)] long_press_enabled: bool) -> impl IntoView {
    let store = use_app_store();
    let container_ref = NodeRef::<leptos::html::Div>::new();

    let sorted = Memo::new(move |_| sort::sorted(&store.entries().get(), store.sort().get()));

    // Staged reveal on initial render and whenever the ordering changes.
    // Removals deliberately skip this; they reflow instead.
    Effect::new(move |_| {
        store.sort().track();
        if let Some(container) = container_ref.get() {
            stagger_reveal(&container);
        }
    });

    view! {
        <div id="serifu-list" class="serifu-grid" node_ref=container_ref>
            <For
                each=move || sorted.get()
                key=|entry| entry.serifu.id.clone()
                children=move |entry| {
                    let search_text = entry.serifu.text.clone();
                    let visible = move || search::matches(&search_text, &store.query().get());
                    view! {
                        <div
                            data-text=entry.serifu.text.to_lowercase()
                            data-date=entry.serifu.created_at.clone()
                            data-featured=entry.serifu.featured.to_string()
                            data-added=entry.added_at.map(|ms| ms.to_string())
                            style:display=move || if visible() { "block" } else { "none" }
                        >
                            <SerifuCard entry=entry.clone() long_press_enabled=long_press_enabled />
                        </div>
                    }
                }
            />
        </div>
    }
}

/// Hide every card, then fade each back in with an incremental delay
fn stagger_reveal(container: &web_sys::HtmlElement) {
    for (index, el) in dom::query_all_html(container, "[data-text]")
        .into_iter()
        .enumerate()
    {
        dom::set_style(&el, "transition", "none");
        dom::set_style(&el, "opacity", "0");
        dom::set_style(&el, "transform", "translateY(20px)");

        Timeout::new(REVEAL_STAGGER_MS * index as u32, move || {
            dom::set_style(&el, "transition", "opacity 0.3s ease, transform 0.3s ease");
            dom::set_style(&el, "opacity", "1");
            dom::set_style(&el, "transform", "translateY(0)");
        })
        .forget();
    }
}
