//! Serifu Card Component
//!
//! One card: text, featured badge, footer with display id and actions,
//! plus the long-press recognizer when enabled.

use leptos::prelude::*;

use crate::categories;
use crate::components::{CopyButton, FavoriteButton};
use crate::context::use_app_context;
use crate::date;
use crate::favorites;
use crate::long_press;
use crate::models::CardEntry;
use crate::toast::use_toasts;

#[component]
pub fn SerifuCard(entry: CardEntry, #[prop(default = true)] long_press_enabled: bool) -> impl IntoView {
    let serifu = entry.serifu;
    let category = entry.category;
    let display_id = categories::display_id(&serifu.id);
    let formatted_date = date::format_date_slash(&serifu.created_at);
    let featured = serifu.featured;

    // Card height and type scale follow text length
    let text_len = serifu.text.chars().count();
    let (card_height, font_size) = if text_len > 80 {
        ("360px", "text-xl md:text-2xl")
    } else if text_len > 50 {
        ("320px", "text-2xl md:text-3xl")
    } else {
        ("280px", "text-3xl md:text-4xl")
    };

    let recognizer = StoredValue::new_local(
        long_press_enabled.then(|| long_press::card_long_press(&serifu.id, &category)),
    );

    let ctx = use_app_context();
    let toasts = use_toasts();
    let on_favorite_toggle = Callback::new(move |(_, added): (String, bool)| {
        if added {
            toasts.favorite_added();
            if favorites::store_for(ctx).consume_first_favorite_notice() {
                toasts.notice("お気に入りはこのブラウザにのみ保存されます");
            }
        } else {
            toasts.favorite_removed();
        }
    });

    view! {
        <div
            id=format!("serifu-{}", serifu.id)
            class="serifu-card bg-white rounded-2xl shadow-md p-8 relative cursor-pointer select-none overflow-hidden flex flex-col"
            data-id=serifu.id.clone()
            data-category=category.clone()
            style=format!("min-height: {card_height};")
            on:mousedown=move |ev| recognizer.with_value(|lp| {
                if let Some(lp) = lp { lp.handle_mouse_down(ev) }
            })
            on:touchstart=move |ev| recognizer.with_value(|lp| {
                if let Some(lp) = lp { lp.handle_touch_start(ev) }
            })
            on:mouseup=move |ev| recognizer.with_value(|lp| {
                if let Some(lp) = lp { lp.handle_mouse_up(ev) }
            })
            on:mouseleave=move |ev| recognizer.with_value(|lp| {
                if let Some(lp) = lp { lp.handle_mouse_leave(ev) }
            })
            on:touchend=move |ev| recognizer.with_value(|lp| {
                if let Some(lp) = lp { lp.handle_touch_end(ev) }
            })
            on:touchcancel=move |ev| recognizer.with_value(|lp| {
                if let Some(lp) = lp { lp.handle_touch_cancel(ev) }
            })
            on:mousemove=move |ev| recognizer.with_value(|lp| {
                if let Some(lp) = lp { lp.handle_mouse_move(ev) }
            })
            on:touchmove=move |ev| recognizer.with_value(|lp| {
                if let Some(lp) = lp { lp.handle_touch_move(ev) }
            })
        >
            <div class="progress-overlay"></div>

            <Show when=move || featured>
                <span
                    class="absolute top-4 right-4 bg-yellow-400 text-yellow-900 text-xs px-3 py-1 rounded-full font-bold pointer-events-none"
                    style="z-index: 2;"
                >
                    "⭐ おすすめ"
                </span>
            </Show>

            <div class="flex-1 flex items-center justify-center p-4" style="z-index: 2;">
                <p class=format!("font-serifu {font_size} text-center leading-relaxed text-gray-800 select-text cursor-text pointer-events-auto")>
                    {serifu.text.clone()}
                </p>
            </div>

            <div
                class="flex justify-between items-center pt-4 mt-auto border-t border-gray-200 pointer-events-none"
                style="z-index: 2;"
            >
                <div class="flex flex-col gap-1">
                    <span class="text-sm font-bold text-gray-400">{display_id}</span>
                    <span class="text-xs text-gray-400">{format!("Created at {formatted_date}")}</span>
                </div>

                <div class="flex gap-2 pointer-events-auto">
                    <FavoriteButton serifu_id=serifu.id.clone() on_toggle=on_favorite_toggle />
                    <CopyButton serifu_id=serifu.id.clone() category=category.clone() />
                </div>
            </div>
        </div>
    }
}
