//! Favorite Button Component
//!
//! Toggles the favorite state of one serifu. The clicked heart flips
//! optimistically; every other instance resyncs from the persisted
//! record when the favorites channel fires.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::context::use_app_context;
use crate::favorites;

/// Click feedback pulse
#[derive(Clone, Copy, PartialEq)]
enum Pulse {
    Added,
    Removed,
}

const PULSE_MS: u32 = 500;

#[component]
pub fn FavoriteButton(
    serifu_id: String,
    #[prop(optional, into)] on_toggle: Option<Callback<(String, bool)>>,
) -> impl IntoView {
    let ctx = use_app_context();
    let id = StoredValue::new(serifu_id);
    let (pulse, set_pulse) = signal(None::<Pulse>);
    // optimistic indicator, valid until the next change notification
    let (optimistic, set_optimistic) = signal(None::<(u32, bool)>);

    let heart = move || {
        let version = ctx.favorites_version.get();
        let is_favorite = match optimistic.get() {
            Some((at, state)) if at == version => state,
            _ => favorites::favorites_record().contains_key(&id.get_value()),
        };
        if is_favorite {
            "❤️"
        } else {
            "🤍"
        }
    };

    let on_click = move |ev: web_sys::MouseEvent| {
        // never let the enclosing card see this press
        ev.stop_propagation();

        let serifu_id = id.get_value();
        let store = favorites::store_for(ctx);
        let added = if store.is_favorite(&serifu_id) {
            store.remove(&serifu_id);
            set_pulse.set(Some(Pulse::Removed));
            false
        } else {
            store.add(&serifu_id);
            set_pulse.set(Some(Pulse::Added));
            true
        };
        set_optimistic.set(Some((ctx.favorites_version.get_untracked(), added)));
        Timeout::new(PULSE_MS, move || set_pulse.set(None)).forget();

        if let Some(on_toggle) = on_toggle {
            on_toggle.run((serifu_id, added));
        }
    };

    view! {
        <button
            class=move || match pulse.get() {
                Some(Pulse::Added) => "favorite-btn action-button p-2 rounded-full transition-all duration-200 added",
                Some(Pulse::Removed) => "favorite-btn action-button p-2 rounded-full transition-all duration-200 removed",
                None => "favorite-btn action-button p-2 rounded-full transition-all duration-200",
            }
            style:transform=move || {
                if pulse.get() == Some(Pulse::Added) { "scale(1.3)" } else { "" }
            }
            aria-label="お気に入りに追加"
            data-serifu-id=id.get_value()
            on:click=on_click
        >
            {heart}
        </button>
    }
}
