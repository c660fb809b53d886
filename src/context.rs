//! Application Context
//!
//! Page-session signals provided via Leptos Context API.

use leptos::prelude::*;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Bumped whenever the persisted favorites record changes - read
    pub favorites_version: ReadSignal<u32>,
    /// Bumped whenever the persisted favorites record changes - write
    set_favorites_version: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(favorites_version: (ReadSignal<u32>, WriteSignal<u32>)) -> Self {
        Self {
            favorites_version: favorites_version.0,
            set_favorites_version: favorites_version.1,
        }
    }

    /// Broadcast that the favorites record changed. Listeners subscribe to
    /// `favorites_version`; the sender never sees them.
    pub fn notify_favorites_changed(&self) {
        self.set_favorites_version.update(|v| *v += 1);
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
