//! Kotobako Frontend App
//!
//! Root component: provides the page-session contexts and dispatches to
//! the page for the current path.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::categories;
use crate::components::{CategoryPage, FavoritesPage, HomePage, NavBar, ToastHost};
use crate::context::AppContext;
use crate::store::AppState;
use crate::toast::Toasts;
use crate::url::{self, Page};

#[component]
pub fn App() -> impl IntoView {
    let favorites_version = signal(0u32);
    provide_context(AppContext::new(favorites_version));
    provide_context(Toasts::new());

    let store = Store::new(AppState {
        categories: categories::load_categories().categories,
        ..Default::default()
    });
    provide_context(store);

    let page = url::current_page();

    view! {
        <NavBar />
        <main class="page-content">
            {match page {
                Page::Home => view! { <HomePage /> }.into_any(),
                Page::Category(category_id) => {
                    view! { <CategoryPage category_id=category_id /> }.into_any()
                }
                Page::Favorites => view! { <FavoritesPage /> }.into_any(),
            }}
        </main>
        <ToastHost />
    }
}
