//! Counter Panel Component

use leptos::prelude::*;
use showcase_core::ShowcaseState;

use crate::context::use_showcase;

/// Counter with its derived status
#[component]
pub fn CounterPanel() -> impl IntoView {
    let ctx = use_showcase();

    let counter = move || ctx.read(|state| state.counter());
    let status = move || ctx.read(|state| state.counter_status());

    view! {
        <section class="counter-panel">
            <h3>"Counter"</h3>
            <div class="counter-value">{counter}</div>
            <p class=move || format!("counter-status {}", status().as_str())>
                "Status: " {move || status().as_str()}
            </p>
            <div class="counter-actions">
                <button on:click=move |_| { ctx.mutate(ShowcaseState::decrement); }>"−"</button>
                <button on:click=move |_| { ctx.mutate(ShowcaseState::reset); }>"Reset"</button>
                <button on:click=move |_| { ctx.mutate(ShowcaseState::increment); }>"+"</button>
            </div>
        </section>
    }
}
