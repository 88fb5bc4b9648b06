//! Application Context
//!
//! The showcase state and its watchers, provided via Leptos Context API.
//! Every mutation goes through [`ShowcaseContext::mutate`] so watchers see
//! the events it produced.

use leptos::prelude::*;
use showcase_core::{ShowcaseConfig, ShowcaseState, Watchers};

#[derive(Clone, Copy)]
pub struct ShowcaseContext {
    /// Whole state container; read through [`ShowcaseContext::read`]
    state: RwSignal<ShowcaseState>,
    /// Watchers hold non-Send closures, so they live in local storage
    watchers: StoredValue<Watchers, LocalStorage>,
    config: StoredValue<ShowcaseConfig>,
}

impl ShowcaseContext {
    pub fn new(state: ShowcaseState, watchers: Watchers, config: ShowcaseConfig) -> Self {
        Self {
            state: RwSignal::new(state),
            watchers: StoredValue::new_local(watchers),
            config: StoredValue::new(config),
        }
    }

    /// Tracked read of the state
    pub fn read<R>(&self, f: impl FnOnce(&ShowcaseState) -> R) -> R {
        self.state.with(f)
    }

    /// Untracked read, for event handlers and one-off setup
    pub fn peek<R>(&self, f: impl FnOnce(&ShowcaseState) -> R) -> R {
        self.state.with_untracked(f)
    }

    /// Run a mutation, then hand its events to the watchers.
    /// Returns `None` if the state has already been disposed.
    pub fn mutate<R>(&self, mutation: impl FnOnce(&mut ShowcaseState) -> R) -> Option<R> {
        let (result, events) = self.state.try_update(|state| {
            let result = mutation(state);
            (result, state.take_events())
        })?;
        if !events.is_empty() {
            self.watchers.with_value(|watchers| watchers.notify_all(&events));
        }
        Some(result)
    }

    pub fn config(&self) -> ShowcaseConfig {
        self.config.get_value()
    }
}

/// Get the showcase context
pub fn use_showcase() -> ShowcaseContext {
    use_context::<ShowcaseContext>().expect("ShowcaseContext should be provided")
}
