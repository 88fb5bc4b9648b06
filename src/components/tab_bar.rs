//! Tab Bar Component
//!
//! Switches between the example panels.

use leptos::prelude::*;
use showcase_core::Tab;

use crate::context::use_showcase;

#[component]
pub fn TabBar(active_tab: Memo<Tab>) -> impl IntoView {
    let ctx = use_showcase();

    view! {
        <nav class="tab-bar">
            {Tab::ALL.into_iter().map(|tab| {
                let is_active = move || active_tab.get() == tab;
                view! {
                    <button
                        class=move || if is_active() { "tab-btn active" } else { "tab-btn" }
                        on:click=move |_| {
                            ctx.mutate(|state| state.select_tab(tab));
                        }
                    >
                        {tab.name()}
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}
