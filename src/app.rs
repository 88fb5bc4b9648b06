//! Reactive Showcase App
//!
//! Tab bar, the active example panel and the event log.

use leptos::prelude::*;
use reactive_stores::Store;
use showcase_core::{ShowcaseConfig, ShowcaseState, Tab};

use crate::components::{CounterPanel, EventLog, ProfileForm, StylingPanel, TabBar, TodoPanel, UserList};
use crate::context::ShowcaseContext;
use crate::store::UiState;
use crate::theme::apply_body_class;
use crate::timers;
use crate::watchers::build_watchers;

#[component]
pub fn App(config: ShowcaseConfig) -> impl IntoView {
    // State
    let ui = Store::new(UiState::new(config.event_log_capacity));
    let ctx = ShowcaseContext::new(ShowcaseState::new(&config), build_watchers(ui), config);

    // Provide context to all children
    provide_context(ui);
    provide_context(ctx);

    // Only re-render the panel when the tab actually changes
    let active_tab = Memo::new(move |_| ctx.read(|state| state.active_tab()));

    // Mount hook
    Effect::new(move |_| {
        apply_body_class(ctx.peek(|state| state.current_theme()));
        timers::schedule_initial_load(ctx);
    });

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>"Reactive Showcase"</h1>
                <p class="subtitle">"Lists, derived values, form binding and watchers, one tab at a time"</p>
            </header>

            <TabBar active_tab=active_tab />

            <main class="main-content">
                <h2 class="panel-title">{move || active_tab.get().title()}</h2>
                {move || match active_tab.get() {
                    Tab::List => view! { <UserList /> }.into_any(),
                    Tab::State => view! {
                        <CounterPanel />
                        <ProfileForm />
                    }.into_any(),
                    Tab::Interactive => view! { <TodoPanel /> }.into_any(),
                    Tab::Styling => view! { <StylingPanel /> }.into_any(),
                }}
            </main>

            <EventLog />
        </div>
    }
}
