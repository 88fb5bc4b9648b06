//! Watchers
//!
//! Passive observers notified with the events a mutation produced.
//! Watchers receive shared references only and cannot touch state.

use crate::event::StateEvent;

type Watcher = Box<dyn Fn(&StateEvent)>;

/// Ordered list of registered watchers
#[derive(Default)]
pub struct Watchers {
    watchers: Vec<Watcher>,
}

impl Watchers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Watchers with the logging watcher already registered
    pub fn with_logging() -> Self {
        let mut watchers = Self::new();
        watchers.subscribe(log_event);
        watchers
    }

    /// Register a watcher; it runs after those registered before it
    pub fn subscribe(&mut self, watcher: impl Fn(&StateEvent) + 'static) {
        self.watchers.push(Box::new(watcher));
    }

    pub fn len(&self) -> usize {
        self.watchers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.watchers.is_empty()
    }

    /// Deliver each event, in order, to every watcher
    pub fn notify_all(&self, events: &[StateEvent]) {
        for event in events {
            for watcher in &self.watchers {
                watcher(event);
            }
        }
    }
}

impl std::fmt::Debug for Watchers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Watchers")
            .field("count", &self.watchers.len())
            .finish()
    }
}

/// Logging watcher: one `info` line per event
pub fn log_event(event: &StateEvent) {
    tracing::info!(target: "showcase", "{}", event);
}
