//! Toast Notifier
//!
//! Stacked, auto-dismissing notifications. The queue itself is plain
//! state owned by the page session; the reactive handle schedules
//! dismissals and is handed out via context.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::dom;

/// Default accent color
pub const DEFAULT_COLOR: &str = "#a78bfa";
/// Default display duration
pub const DEFAULT_DURATION_MS: u32 = 3000;
/// Exit transition duration before an entry leaves the queue
pub const EXIT_MS: u32 = 300;

/// How many toasts fit a viewport of the given width
pub fn capacity_for_width(width: f64) -> usize {
    if width < dom::MOBILE_BREAKPOINT_PX {
        2
    } else {
        3
    }
}

/// One visible notification
#[derive(Clone, Debug, PartialEq)]
pub struct ToastNote {
    pub id: u32,
    pub icon: String,
    pub message: String,
    pub color: String,
    pub duration_ms: u32,
    /// Compact styling for narrow viewports, decided at show time
    pub compact: bool,
    /// Animating out; no longer counts against capacity
    pub leaving: bool,
}

/// Ordered queue of visible notifications, oldest first
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue {
    next_id: u32,
    notes: Vec<ToastNote>,
}

impl ToastQueue {
    /// Append a new entry, evicting the oldest active entries while the
    /// queue is at capacity. Returns the new id and the evicted ids in
    /// eviction order.
    pub fn push(
        &mut self,
        icon: &str,
        message: &str,
        color: &str,
        duration_ms: u32,
        compact: bool,
        capacity: usize,
    ) -> (u32, Vec<u32>) {
        let mut evicted = Vec::new();
        while self.active_count() >= capacity {
            let Some(oldest) = self.notes.iter_mut().find(|note| !note.leaving) else {
                break;
            };
            oldest.leaving = true;
            evicted.push(oldest.id);
        }

        self.next_id += 1;
        let id = self.next_id;
        self.notes.push(ToastNote {
            id,
            icon: icon.to_string(),
            message: message.to_string(),
            color: color.to_string(),
            duration_ms,
            compact,
            leaving: false,
        });
        (id, evicted)
    }

    /// Begin the exit transition. False if the entry is unknown or
    /// already leaving.
    pub fn mark_leaving(&mut self, id: u32) -> bool {
        match self.notes.iter_mut().find(|note| note.id == id) {
            Some(note) if !note.leaving => {
                note.leaving = true;
                true
            }
            _ => false,
        }
    }

    /// Drop the entry entirely. A no-op if it is already gone.
    pub fn remove(&mut self, id: u32) -> bool {
        let before = self.notes.len();
        self.notes.retain(|note| note.id != id);
        self.notes.len() != before
    }

    pub fn is_leaving(&self, id: u32) -> bool {
        self.notes
            .iter()
            .find(|note| note.id == id)
            .map(|note| note.leaving)
            .unwrap_or(true)
    }

    /// Entries counted against capacity
    pub fn active_count(&self) -> usize {
        self.notes.iter().filter(|note| !note.leaving).count()
    }

    pub fn active_ids(&self) -> Vec<u32> {
        self.notes
            .iter()
            .filter(|note| !note.leaving)
            .map(|note| note.id)
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn notes(&self) -> &[ToastNote] {
        &self.notes
    }
}

/// Reactive toast handle, provided via context and shared by everything
/// that raises notifications on the page.
#[derive(Clone, Copy)]
pub struct Toasts {
    queue: RwSignal<ToastQueue>,
}

impl Toasts {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::default()),
        }
    }

    pub fn queue(&self) -> RwSignal<ToastQueue> {
        self.queue
    }

    pub fn show(&self, icon: &str, message: &str, color: &str, duration_ms: u32) {
        let width = dom::viewport_width();
        let capacity = capacity_for_width(width);
        let compact = width < dom::MOBILE_BREAKPOINT_PX;

        let (id, evicted) = self
            .queue
            .write()
            .push(icon, message, color, duration_ms, compact, capacity);
        for evicted_id in evicted {
            self.schedule_exit(evicted_id);
        }

        let this = *self;
        Timeout::new(duration_ms, move || this.dismiss(id)).forget();
    }

    /// Animate out, then drop after the exit transition. Idempotent.
    pub fn dismiss(&self, id: u32) {
        let marked = self.queue.write().mark_leaving(id);
        if marked {
            self.schedule_exit(id);
        }
    }

    fn schedule_exit(&self, id: u32) {
        let this = *self;
        Timeout::new(EXIT_MS, move || {
            this.queue.write().remove(id);
        })
        .forget();
    }

    // ========================
    // Preset notifications
    // ========================

    pub fn favorite_added(&self) {
        self.show("💖", "お気に入りに追加", "#ec4899", 2000);
    }

    pub fn favorite_removed(&self) {
        self.show("💔", "お気に入りから削除", "#ef4444", 2000);
    }

    pub fn link_copied(&self) {
        self.show("🔗", "リンクをコピー", "#3b82f6", 2000);
    }

    pub fn error(&self, message: Option<&str>) {
        self.show("❌", message.unwrap_or("エラーが発生"), "#ef4444", DEFAULT_DURATION_MS);
    }

    pub fn success(&self, message: Option<&str>) {
        self.show("✅", message.unwrap_or("成功しました"), "#10b981", 2000);
    }

    pub fn notice(&self, message: &str) {
        self.show("💡", message, DEFAULT_COLOR, 4000);
    }
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_toasts() -> Toasts {
    expect_context::<Toasts>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn push(queue: &mut ToastQueue, capacity: usize) -> (u32, Vec<u32>) {
        queue.push("✅", "done", "#10b981", 2000, true, capacity)
    }

    #[test]
    fn test_capacity_eviction_is_fifo() {
        let mut queue = ToastQueue::default();
        let capacity = capacity_for_width(400.0);
        assert_eq!(capacity, 2);

        let (first, evicted) = push(&mut queue, capacity);
        assert!(evicted.is_empty());
        let (second, evicted) = push(&mut queue, capacity);
        assert!(evicted.is_empty());

        let (third, evicted) = push(&mut queue, capacity);
        assert_eq!(evicted, vec![first]);
        let (fourth, evicted) = push(&mut queue, capacity);
        assert_eq!(evicted, vec![second]);

        assert_eq!(queue.active_count(), 2);
        assert_eq!(queue.active_ids(), vec![third, fourth]);
    }

    #[test]
    fn test_removal_is_idempotent() {
        let mut queue = ToastQueue::default();
        let (id, _) = push(&mut queue, 3);

        assert!(queue.mark_leaving(id));
        assert!(!queue.mark_leaving(id));
        assert!(queue.remove(id));
        assert!(!queue.remove(id));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_leaving_entries_do_not_count_against_capacity() {
        let mut queue = ToastQueue::default();
        let (first, _) = push(&mut queue, 2);
        push(&mut queue, 2);
        queue.mark_leaving(first);

        let (_, evicted) = push(&mut queue, 2);
        // only the still-active entry was at risk, and capacity had room
        assert!(evicted.is_empty());
        assert_eq!(queue.active_count(), 2);
        // the leaving entry is still rendered until its exit finishes
        assert_eq!(queue.notes().len(), 3);
    }

    #[test]
    fn test_unknown_ids_read_as_gone() {
        let queue = ToastQueue::default();
        assert!(queue.is_leaving(99));
    }

    #[test]
    fn test_capacity_for_width() {
        assert_eq!(capacity_for_width(320.0), 2);
        assert_eq!(capacity_for_width(767.9), 2);
        assert_eq!(capacity_for_width(768.0), 3);
        assert_eq!(capacity_for_width(1920.0), 3);
    }
}
