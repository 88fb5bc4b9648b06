//! Event Log Component
//!
//! Mirrors watcher output on the page, newest at the bottom.

use leptos::prelude::*;

use crate::store::{store_clear_log, use_ui_store, UiStateStoreFields};

#[component]
pub fn EventLog() -> impl IntoView {
    let store = use_ui_store();

    view! {
        <aside class="event-log">
            <div class="event-log-header">
                <h3>"Watcher log"</h3>
                <button class="small" on:click=move |_| store_clear_log(&store)>"Clear"</button>
            </div>
            <ol class="event-log-lines">
                {move || store.event_log().get().into_iter().map(|line| view! {
                    <li>{line}</li>
                }).collect_view()}
            </ol>
        </aside>
    }
}
