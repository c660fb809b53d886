//! Home Page
//!
//! A random selection of serifu across all categories: 20 cards on wide
//! viewports, 15 on narrow ones, re-sliced when a debounced resize
//! crosses the breakpoint.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::array;
use crate::components::{SearchBar, SerifuList, SortSelect};
use crate::dom;
use crate::models::CardEntry;
use crate::sort::SortType;
use crate::store::{use_app_store, AppStateStoreFields};

const DESKTOP_COUNT: usize = 20;
const MOBILE_COUNT: usize = 15;
const RESIZE_DEBOUNCE_MS: u32 = 250;

fn card_count(narrow: bool) -> usize {
    if narrow {
        MOBILE_COUNT
    } else {
        DESKTOP_COUNT
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let store = use_app_store();

    let all: Vec<CardEntry> = store.categories().with_untracked(|categories| {
        categories
            .iter()
            .flat_map(|category| {
                category.serifu.iter().map(|serifu| CardEntry {
                    serifu: serifu.clone(),
                    category: category.id.clone(),
                    added_at: None,
                })
            })
            .collect()
    });

    // one shuffle per page load
    let shuffled = StoredValue::new(array::shuffle(&all));
    let narrow = dom::viewport_width() < dom::MOBILE_BREAKPOINT_PX;
    let was_narrow = StoredValue::new(narrow);

    store.entries().set(shuffled.with_value(|cards| {
        cards.iter().take(card_count(narrow)).cloned().collect()
    }));
    store.sort().set(SortType::Newest);

    // re-slice only when a debounced resize crosses the breakpoint
    let debounce = StoredValue::new_local(None::<Timeout>);
    let on_resize = Closure::<dyn FnMut()>::new(move || {
        debounce.update_value(|slot| {
            slot.take();
        });
        let timeout = Timeout::new(RESIZE_DEBOUNCE_MS, move || {
            let narrow_now = dom::viewport_width() < dom::MOBILE_BREAKPOINT_PX;
            if was_narrow.get_value() != narrow_now {
                was_narrow.set_value(narrow_now);
                store.entries().set(shuffled.with_value(|cards| {
                    cards.iter().take(card_count(narrow_now)).cloned().collect()
                }));
            }
        });
        debounce.set_value(Some(timeout));
    });
    if let Some(window) = web_sys::window() {
        let _ = window
            .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
    }
    on_resize.forget();

    view! {
        <section class="page home-page">
            <h1 class="page-title">"今日のセリフ"</h1>
            <div class="list-controls">
                <SearchBar />
                <SortSelect />
            </div>
            <SerifuList />
        </section>
    }
}
