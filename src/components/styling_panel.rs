//! Styling Panel Component
//!
//! Theme switching, the progress animation and conditional rendering.

use leptos::prelude::*;
use showcase_core::{ProgressPhase, ShowcaseState, Theme};

use crate::context::use_showcase;
use crate::timers;

#[component]
pub fn StylingPanel() -> impl IntoView {
    view! {
        <section class="styling-panel">
            <ThemePicker />
            <ProgressSection />
            <ConditionalDemo />
        </section>
    }
}

#[component]
fn ThemePicker() -> impl IntoView {
    let ctx = use_showcase();
    let theme = move || ctx.read(|state| state.current_theme());

    view! {
        <div class="theme-picker">
            <h3>"Theme"</h3>
            <select
                prop:value=move || theme().name()
                on:change={move |ev| match event_target_value(&ev).parse::<Theme>() {
                    Ok(theme) => {
                        ctx.mutate(|state| state.set_theme(theme));
                    }
                    Err(err) => tracing::warn!(%err, "ignoring theme selection"),
                }}
            >
                {Theme::ALL.into_iter().map(|theme| view! {
                    <option value=theme.name()>{theme.label()}</option>
                }).collect_view()}
            </select>
            <div class=move || format!("theme-preview {}", theme().css_class())>
                {move || format!("Current theme: {}", theme().label())}
            </div>
        </div>
    }
}

#[component]
fn ProgressSection() -> impl IntoView {
    let ctx = use_showcase();
    let progress = move || ctx.read(|state| state.progress());
    let phase = move || ctx.read(|state| state.progress_phase());

    view! {
        <div class="progress-demo">
            <h3>"Progress"</h3>
            <div class="progress-bar">
                <div class="progress-fill" style=move || format!("width: {}%;", progress())></div>
            </div>
            <p class="progress-label">
                {move || match phase() {
                    ProgressPhase::Idle => "Idle".to_string(),
                    ProgressPhase::Running => format!("{}%", progress()),
                    ProgressPhase::Cooldown => "Done!".to_string(),
                }}
            </p>
            <button on:click=move |_| timers::animate_progress(ctx)>
                {move || if phase() == ProgressPhase::Idle { "Animate" } else { "Restart" }}
            </button>
            <button
                disabled=move || phase() == ProgressPhase::Idle
                on:click=move |_| {
                    ctx.mutate(ShowcaseState::cancel_progress);
                }
            >
                "Stop"
            </button>
        </div>
    }
}

#[component]
fn ConditionalDemo() -> impl IntoView {
    let ctx = use_showcase();
    let show_message = move || ctx.read(|state| state.show_message());
    let is_loading = move || ctx.read(|state| state.is_loading());

    view! {
        <div class="conditional-demo">
            <h3>"Conditional rendering"</h3>
            <label>
                <input
                    type="checkbox"
                    prop:checked=show_message
                    on:change=move |_| {
                        ctx.mutate(ShowcaseState::toggle_message);
                    }
                />
                "Show message"
            </label>
            <label>
                <input
                    type="checkbox"
                    prop:checked=is_loading
                    on:change=move |ev| {
                        let loading = event_target_checked(&ev);
                        ctx.mutate(|state| state.set_loading(loading));
                    }
                />
                "Loading"
            </label>

            <Show when=show_message>
                <div class="message-box">"Hello! This box is rendered only while the flag is on."</div>
            </Show>
            <Show
                when=is_loading
                fallback=|| view! { <p class="loaded">"Content loaded."</p> }
            >
                <div class="spinner">"Loading..."</div>
            </Show>
            <Show when=move || ctx.read(|state| state.has_error())>
                <div class="error-banner">"Something went wrong."</div>
            </Show>
        </div>
    }
}
