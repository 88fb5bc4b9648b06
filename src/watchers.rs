//! Watcher Wiring
//!
//! Hooks the host page into showcase events: console logging, the body
//! theme class and the on-page event log.

use showcase_core::{StateEvent, Watchers};

use crate::store::{store_push_log, UiStore};
use crate::theme::apply_body_class;

pub fn build_watchers(ui: UiStore) -> Watchers {
    let mut watchers = Watchers::with_logging();

    watchers.subscribe(|event| {
        if let StateEvent::ThemeChanged { theme } = event {
            apply_body_class(*theme);
        }
    });

    watchers.subscribe(move |event| store_push_log(&ui, event.to_string()));

    watchers
}
