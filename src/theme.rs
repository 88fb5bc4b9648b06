//! Theme Side Effect
//!
//! Assigns the `theme-<name>` class to the document body.

use showcase_core::Theme;

pub fn apply_body_class(theme: Theme) {
    let body = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body());
    match body {
        Some(body) => body.set_class_name(&theme.css_class()),
        None => tracing::warn!("no document body, theme class not applied"),
    }
}
