//! Empty State Component

use leptos::prelude::*;

use crate::url;

/// Shown on the favorites page when nothing is favorited yet
#[component]
pub fn EmptyState() -> impl IntoView {
    view! {
        <div id="empty-state" class="empty-state">
            <p class="empty-icon">"🤍"</p>
            <p class="empty-text">"まだお気に入りがありません"</p>
            <a class="empty-link" href=url::home_url()>"セリフを探しに行く"</a>
        </div>
    }
}
