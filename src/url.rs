//! URL Helpers
//!
//! URL generation, path predicates, and page routing under the app base.

use leptos::logging::error;

/// Site base path segment
pub const APP_BASE: &str = "/kotobako";

/// The page a path resolves to
#[derive(Clone, Debug, PartialEq)]
pub enum Page {
    Home,
    Category(String),
    Favorites,
}

fn location() -> Option<web_sys::Location> {
    web_sys::window().map(|win| win.location())
}

pub fn origin() -> String {
    location().and_then(|loc| loc.origin().ok()).unwrap_or_default()
}

pub fn base_url() -> String {
    format!("{}{}", origin(), APP_BASE)
}

pub fn home_url() -> String {
    base_url()
}

pub fn category_url(category_id: &str) -> String {
    format!("{}/category/{}", base_url(), category_id)
}

pub fn favorites_url() -> String {
    format!("{}/favorites", base_url())
}

/// Shareable link to one serifu on its category page
pub fn serifu_share_url(serifu_id: &str, category_id: &str) -> String {
    format!("{}#{}", category_url(category_id), serifu_id)
}

pub fn current_path() -> String {
    location()
        .and_then(|loc| loc.pathname().ok())
        .unwrap_or_default()
}

/// URL fragment without the leading '#'
pub fn current_hash() -> String {
    location()
        .and_then(|loc| loc.hash().ok())
        .map(|hash| hash.trim_start_matches('#').to_string())
        .unwrap_or_default()
}

pub fn is_favorites_page() -> bool {
    current_path().contains("/favorites")
}

pub fn navigate_to(url: &str) {
    if let Some(loc) = location() {
        if let Err(err) = loc.set_href(url) {
            error!("Navigation failed: {err:?}");
        }
    }
}

pub fn current_page() -> Page {
    page_for_path(&current_path())
}

pub fn page_for_path(path: &str) -> Page {
    let rest = path.strip_prefix(APP_BASE).unwrap_or(path);
    let rest = rest.trim_end_matches('/');
    if let Some(category_id) = rest.strip_prefix("/category/") {
        Page::Category(category_id.to_string())
    } else if rest == "/favorites" {
        Page::Favorites
    } else {
        Page::Home
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_for_path() {
        assert_eq!(page_for_path("/kotobako"), Page::Home);
        assert_eq!(page_for_path("/kotobako/"), Page::Home);
        assert_eq!(
            page_for_path("/kotobako/category/batsu-game"),
            Page::Category("batsu-game".to_string())
        );
        assert_eq!(
            page_for_path("/kotobako/category/kokuhaku/"),
            Page::Category("kokuhaku".to_string())
        );
        assert_eq!(page_for_path("/kotobako/favorites"), Page::Favorites);
    }

    #[test]
    fn test_page_for_path_without_base() {
        assert_eq!(page_for_path("/"), Page::Home);
        assert_eq!(page_for_path("/favorites"), Page::Favorites);
    }
}
