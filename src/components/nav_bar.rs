//! Navigation Bar Component
//!
//! Home and favorites links with a live favorites count badge.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::favorites;
use crate::url;

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_app_context();

    let count = move || {
        ctx.favorites_version.get();
        favorites::favorites_record().len()
    };

    view! {
        <header class="site-header">
            <nav class="site-nav">
                <a class="nav-link" href=url::home_url()>"🏠 ホーム"</a>
                <a class="nav-link nav-favorites" href=url::favorites_url()>
                    "❤️ お気に入り"
                    <Show when=move || (count() > 0)>
                        <span class="favorite-badge">{count}</span>
                    </Show>
                </a>
            </nav>
        </header>
    }
}
