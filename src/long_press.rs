//! Long-Press Actions
//!
//! Wires the gesture recognizer to category navigation and in-page
//! scrolling.

use leptos::prelude::Callback;
use leptos_longpress::LongPress;

use crate::models::storage_keys;
use crate::scroll;
use crate::storage::KvStore;
use crate::url;

/// Controls inside a card that must never start a long press
const INTERACTIVE_SELECTOR: &str = ".favorite-btn, .copy-btn, button, a";
const VIBRATION_MS: u32 = 50;

/// Recognizer for one card, completing into scroll-or-navigate
pub fn card_long_press(serifu_id: &str, category_id: &str) -> LongPress {
    let serifu_id = serifu_id.to_string();
    let category_id = category_id.to_string();
    LongPress::new(Callback::new(move |_| {
        long_press_action(&serifu_id, &category_id)
    }))
    .with_ignored_selector(INTERACTIVE_SELECTOR)
}

/// Already on the card's category page: scroll to it in place.
/// Anywhere else: persist the target and navigate to the category page,
/// which picks it up on load.
fn long_press_action(serifu_id: &str, category_id: &str) {
    vibrate(VIBRATION_MS);

    if url::current_path().contains(&format!("/category/{category_id}")) {
        scroll::highlight_serifu(serifu_id);
    } else {
        KvStore::browser().set(storage_keys::SCROLL_TO_SERIFU, &serifu_id);
        url::navigate_to(&format!("{}#{}", url::category_url(category_id), serifu_id));
    }
}

fn vibrate(duration_ms: u32) {
    if let Some(window) = web_sys::window() {
        let _ = window.navigator().vibrate_with_duration(duration_ms);
    }
}
