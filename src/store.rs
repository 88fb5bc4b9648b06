//! View-only State Store
//!
//! Uses Leptos reactive_stores for the on-page event log.

use leptos::prelude::*;
use reactive_stores::Store;

/// State that belongs to the page, not to the showcase model
#[derive(Clone, Debug, Default, Store)]
pub struct UiState {
    /// Formatted watcher output, oldest first
    pub event_log: Vec<String>,
    /// Lines kept before the oldest are dropped
    pub event_log_capacity: usize,
}

impl UiState {
    pub fn new(event_log_capacity: usize) -> Self {
        Self {
            event_log: Vec::new(),
            event_log_capacity,
        }
    }
}

/// Type alias for the store
pub type UiStore = Store<UiState>;

/// Get the UI store from context
pub fn use_ui_store() -> UiStore {
    expect_context::<UiStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Append a log line, dropping the oldest lines past `capacity`
pub fn push_capped(log: &mut Vec<String>, line: String, capacity: usize) {
    log.push(line);
    if log.len() > capacity {
        let overflow = log.len() - capacity;
        log.drain(..overflow);
    }
}

/// Append a line to the event log in the store
pub fn store_push_log(store: &UiStore, line: String) {
    let capacity = store.event_log_capacity().get_untracked();
    push_capped(&mut store.event_log().write(), line, capacity);
}

/// Empty the event log
pub fn store_clear_log(store: &UiStore) {
    store.event_log().write().clear();
}
