//! Scroll & Highlight
//!
//! Smooth-scrolls to a target card and restores cross-page long-press
//! targets after load.

use gloo_timers::callback::Timeout;
use leptos::logging::warn;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::dom;
use crate::models::storage_keys;
use crate::storage::KvStore;
use crate::url;

/// How long the highlight outline stays on the target
const HIGHLIGHT_MS: u32 = 2000;
/// Delay before scrolling, so layout has settled after load
const RESTORE_DELAY_MS: u32 = 100;

/// Smooth-scroll to `serifu-<id>` and flash a highlight on it
pub fn highlight_serifu(serifu_id: &str) {
    let element_id = format!("serifu-{serifu_id}");
    let Some(element) = dom::get_element_by_id(&element_id) else {
        warn!("Scroll target not found: {element_id}");
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Center);
    element.scroll_into_view_with_scroll_into_view_options(&options);

    dom::set_style(&element, "outline", "4px solid rgba(167, 139, 250, 0.6)");
    dom::set_style(&element, "outline-offset", "8px");
    dom::set_style(&element, "box-shadow", "0 0 0 8px rgba(167, 139, 250, 0.2)");

    Timeout::new(HIGHLIGHT_MS, move || {
        dom::clear_style(&element, "outline");
        dom::clear_style(&element, "outline-offset");
        dom::clear_style(&element, "box-shadow");
    })
    .forget();
}

/// Honor a persisted long-press target or a URL fragment, each at most
/// once per load. The persisted marker is cleared before the scroll is
/// scheduled.
pub fn restore_scroll_target() {
    let kv = KvStore::browser();
    let saved: String = kv.get(storage_keys::SCROLL_TO_SERIFU, String::new());
    if !saved.is_empty() {
        kv.set(storage_keys::SCROLL_TO_SERIFU, &"");
        Timeout::new(RESTORE_DELAY_MS, move || highlight_serifu(&saved)).forget();
    }

    let hash = url::current_hash();
    if !hash.is_empty() {
        Timeout::new(RESTORE_DELAY_MS, move || highlight_serifu(&hash)).forget();
    }
}
