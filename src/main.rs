//! Reactive Showcase Frontend Entry Point

mod app;
mod components;
mod context;
mod store;
mod theme;
mod timers;
mod watchers;

use app::App;
use leptos::prelude::*;
use showcase_core::ShowcaseConfig;

/// Optional JSON override baked in at build time
fn load_config() -> ShowcaseConfig {
    match option_env!("SHOWCASE_CONFIG") {
        Some(raw) => ShowcaseConfig::from_json(raw).unwrap_or_else(|err| {
            tracing::warn!(%err, "SHOWCASE_CONFIG rejected, using defaults");
            ShowcaseConfig::default()
        }),
        None => ShowcaseConfig::default(),
    }
}

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    let config = load_config();
    mount_to_body(move || view! { <App config=config /> });
}
