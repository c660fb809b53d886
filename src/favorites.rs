//! Favorites Store
//!
//! Persists favorited serifu ids with added timestamps and notifies
//! listeners on every change. The store re-reads the persisted record
//! on each operation, so independent call sites always see the latest
//! state.

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::context::AppContext;
use crate::date::now_ms;
use crate::dom;
use crate::models::{storage_keys, CardEntry, Category, FavoritesData};
use crate::storage::KvStore;
use crate::url;

/// Fade-out duration before an animated removal commits
const REMOVE_FADE_MS: u32 = 400;

#[derive(Clone)]
pub struct FavoritesStore {
    kv: KvStore,
    on_change: Rc<dyn Fn()>,
}

impl FavoritesStore {
    pub fn new(kv: KvStore, on_change: impl Fn() + 'static) -> Self {
        Self {
            kv,
            on_change: Rc::new(on_change),
        }
    }

    /// The persisted favorites record
    pub fn data(&self) -> FavoritesData {
        self.kv.get(storage_keys::FAVORITES_DATA, FavoritesData::new())
    }

    fn save(&self, data: &FavoritesData) {
        self.kv.set(storage_keys::FAVORITES_DATA, data);
        (self.on_change)();
    }

    pub fn count(&self) -> usize {
        self.data().len()
    }

    pub fn is_favorite(&self, serifu_id: &str) -> bool {
        self.data().contains_key(serifu_id)
    }

    /// Add a favorite with the current timestamp.
    /// Returns false (and changes nothing) if already present.
    pub fn add(&self, serifu_id: &str) -> bool {
        let mut data = self.data();
        if data.contains_key(serifu_id) {
            return false;
        }
        data.insert(serifu_id.to_string(), now_ms());
        self.save(&data);
        true
    }

    /// Remove a favorite, animating the card out when the favorites
    /// listing is the current view. Returns false if absent.
    pub fn remove(&self, serifu_id: &str) -> bool {
        self.remove_with_animation(serifu_id, url::is_favorites_page())
    }

    pub fn remove_with_animation(&self, serifu_id: &str, animate: bool) -> bool {
        if !self.data().contains_key(serifu_id) {
            return false;
        }
        if animate {
            self.remove_animated(serifu_id);
        } else {
            self.commit_removal(serifu_id);
        }
        true
    }

    /// Authoritative removal: delete, persist, notify
    fn commit_removal(&self, serifu_id: &str) {
        let mut data = self.data();
        data.remove(serifu_id);
        self.save(&data);
    }

    /// Two-phase removal: fade the card out first, commit the record
    /// change once the transition finishes, then FLIP the remaining
    /// cards from their old positions into the new layout. Until the
    /// commit fires, the record still reports the id as favorited.
    fn remove_animated(&self, serifu_id: &str) {
        // the card root carries data-id; the sortable wrapper is its parent
        let card = dom::query_selector(&format!("[data-id=\"{serifu_id}\"]"))
            .and_then(|el| el.parent_element())
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        let Some(card) = card else {
            self.commit_removal(serifu_id);
            return;
        };

        let old_positions: Vec<(HtmlElement, f64)> = dom::get_element_by_id("serifu-list")
            .map(|container| dom::query_all_html(&container, "[data-text]"))
            .unwrap_or_default()
            .into_iter()
            .map(|el| {
                let top = el.get_bounding_client_rect().top();
                (el, top)
            })
            .collect();

        dom::set_style(&card, "transition", "all 0.4s cubic-bezier(0.4, 0, 0.2, 1)");
        dom::set_style(&card, "transform", "scale(0.8) translateY(-20px)");
        dom::set_style(&card, "opacity", "0");
        dom::set_style(&card, "pointer-events", "none");

        let store = self.clone();
        let serifu_id = serifu_id.to_string();
        Timeout::new(REMOVE_FADE_MS, move || {
            store.commit_removal(&serifu_id);
            dom::raf(move || reflow_from(old_positions));
        })
        .forget();
    }

    /// Replace the record with an empty one. One notification.
    pub fn clear_all(&self) {
        self.save(&FavoritesData::new());
    }

    /// True exactly once per browser: the first time a favorite is added
    pub fn consume_first_favorite_notice(&self) -> bool {
        if self.kv.get(storage_keys::FAVORITE_NOTICE_SEEN, false) {
            return false;
        }
        self.kv.set(storage_keys::FAVORITE_NOTICE_SEEN, &true);
        true
    }
}

/// FavoritesStore wired to the page-session change channel
pub fn store_for(ctx: AppContext) -> FavoritesStore {
    FavoritesStore::new(KvStore::browser(), move || ctx.notify_favorites_changed())
}

/// Read-only snapshot of the persisted record, for reactive closures
pub fn favorites_record() -> FavoritesData {
    KvStore::browser().get(storage_keys::FAVORITES_DATA, FavoritesData::new())
}

/// Cards for every favorited serifu, carrying its added timestamp
pub fn favorite_entries(categories: &[Category], record: &FavoritesData) -> Vec<CardEntry> {
    let mut entries = Vec::new();
    for category in categories {
        for serifu in &category.serifu {
            if let Some(added_at) = record.get(&serifu.id) {
                entries.push(CardEntry {
                    serifu: serifu.clone(),
                    category: category.id.clone(),
                    added_at: Some(*added_at),
                });
            }
        }
    }
    entries
}

/// FLIP pass: cards still in the document animate from their recorded
/// position to wherever the re-layout put them.
fn reflow_from(old_positions: Vec<(HtmlElement, f64)>) {
    let mut moved = Vec::new();
    for (el, old_top) in old_positions {
        if !el.is_connected() {
            continue;
        }
        let delta = old_top - el.get_bounding_client_rect().top();
        if delta != 0.0 {
            dom::set_style(&el, "transition", "none");
            dom::set_style(&el, "transform", &format!("translateY({delta}px)"));
            moved.push(el);
        }
    }
    if moved.is_empty() {
        return;
    }
    dom::raf(move || {
        for el in &moved {
            dom::set_style(el, "transition", "transform 0.5s cubic-bezier(0.25, 0.8, 0.25, 1)");
            dom::set_style(el, "transform", "translateY(0)");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Serifu;
    use std::cell::Cell;

    fn make_store() -> (FavoritesStore, Rc<Cell<u32>>) {
        let notifications = Rc::new(Cell::new(0));
        let counter = Rc::clone(&notifications);
        let store = FavoritesStore::new(KvStore::in_memory(), move || {
            counter.set(counter.get() + 1);
        });
        (store, notifications)
    }

    fn make_category(id: &str, serifu_ids: &[&str]) -> Category {
        Category {
            id: id.to_string(),
            name: id.to_string(),
            icon: String::new(),
            description: String::new(),
            serifu: serifu_ids
                .iter()
                .map(|serifu_id| Serifu {
                    id: serifu_id.to_string(),
                    text: format!("text {serifu_id}"),
                    created_at: "2024-01-01".to_string(),
                    featured: false,
                })
                .collect(),
        }
    }

    #[test]
    fn test_add_is_idempotent() {
        let (store, notifications) = make_store();

        assert!(store.add("x-001"));
        assert!(!store.add("x-001"));

        let data = store.data();
        assert_eq!(data.len(), 1);
        assert!(data["x-001"] > 0);
        // the no-op second add does not notify
        assert_eq!(notifications.get(), 1);
    }

    #[test]
    fn test_remove_absent_is_a_no_op() {
        let (store, notifications) = make_store();
        assert!(!store.remove_with_animation("ghost", false));
        assert!(store.data().is_empty());
        assert_eq!(notifications.get(), 0);
    }

    #[test]
    fn test_add_then_remove_round_trip() {
        let (store, notifications) = make_store();

        assert!(store.add("x-001"));
        assert!(store.is_favorite("x-001"));
        assert_eq!(store.data().len(), 1);

        assert!(store.remove_with_animation("x-001", false));
        assert!(!store.is_favorite("x-001"));
        assert!(store.data().is_empty());
        assert_eq!(notifications.get(), 2);
    }

    #[test]
    fn test_clear_all_notifies_once() {
        let (store, notifications) = make_store();
        store.add("a-001");
        store.add("a-002");
        let before = notifications.get();

        store.clear_all();
        assert_eq!(store.count(), 0);
        assert_eq!(notifications.get(), before + 1);
    }

    #[test]
    fn test_first_favorite_notice_fires_once() {
        let (store, _) = make_store();
        assert!(store.consume_first_favorite_notice());
        assert!(!store.consume_first_favorite_notice());
    }

    #[test]
    fn test_favorite_entries_carry_added_timestamps() {
        let categories = vec![
            make_category("batsu-game", &["batsu-game-001", "batsu-game-002"]),
            make_category("kokuhaku", &["kokuhaku-001"]),
        ];
        let mut record = FavoritesData::new();
        record.insert("batsu-game-002".to_string(), 1_700_000_000_000);
        record.insert("kokuhaku-001".to_string(), 1_700_000_100_000);

        let entries = favorite_entries(&categories, &record);
        assert_eq!(entries.len(), 2);
        let batsu = entries
            .iter()
            .find(|e| e.serifu.id == "batsu-game-002")
            .unwrap();
        assert_eq!(batsu.category, "batsu-game");
        assert_eq!(batsu.added_at, Some(1_700_000_000_000));
    }
}
