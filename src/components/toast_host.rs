//! Toast Host Component
//!
//! Renders the shared toast container while any notification is alive;
//! the container tears down once the queue drains.

use leptos::prelude::*;

use crate::dom;
use crate::toast::{use_toasts, ToastNote};

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_toasts();
    let queue = toasts.queue();

    view! {
        <Show when=move || queue.with(|q| !q.is_empty())>
            <div
                id="toast-container"
                class="fixed bottom-4 right-4 md:bottom-6 md:right-6 flex flex-col-reverse gap-2 md:gap-3 z-50 pointer-events-none"
            >
                <For
                    each=move || {
                        queue.with(|q| q.notes().iter().rev().cloned().collect::<Vec<_>>())
                    }
                    key=|note| note.id
                    children=move |note| view! { <ToastItemView note=note /> }
                />
            </div>
        </Show>
    }
}

#[component]
fn ToastItemView(note: ToastNote) -> impl IntoView {
    let toasts = use_toasts();
    let queue = toasts.queue();
    let id = note.id;

    // slide in on the frame after mount
    let (entered, set_entered) = signal(false);
    Effect::new(move |_| {
        dom::raf(move || set_entered.set(true));
    });

    let color = note.color.clone();
    let style = move || {
        let shown = entered.get() && !queue.with(|q| q.is_leaving(id));
        if shown {
            format!("background-color: {color}; opacity: 1; transform: translateX(0) scale(1);")
        } else {
            format!(
                "background-color: {color}; opacity: 0; transform: translateX(400px) scale(0.9);"
            )
        }
    };

    let (toast_class, icon_class, message_class) = if note.compact {
        (
            "flex items-center gap-2 px-4 py-2.5 rounded-full shadow-xl text-white font-bold transform transition-all duration-300 pointer-events-auto text-sm",
            "text-lg",
            "text-xs whitespace-nowrap",
        )
    } else {
        (
            "flex items-center gap-3 px-6 py-4 rounded-full shadow-2xl text-white font-bold transform transition-all duration-300 pointer-events-auto",
            "text-2xl",
            "text-base whitespace-nowrap",
        )
    };

    view! {
        <div class=toast_class style=style>
            <span class=icon_class>{note.icon.clone()}</span>
            <span class=message_class>{note.message.clone()}</span>
        </div>
    }
}
