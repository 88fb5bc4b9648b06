//! Profile Form Component
//!
//! Two-way bound fields with a live completeness meter.

use leptos::prelude::*;
use showcase_core::{FormField, ShowcaseState};

use crate::context::use_showcase;

/// Role options; the empty value counts as blank
const ROLES: &[(&str, &str)] = &[
    ("", "Pick a role"),
    ("developer", "Developer"),
    ("designer", "Designer"),
    ("manager", "Manager"),
];

#[component]
pub fn ProfileForm() -> impl IntoView {
    let ctx = use_showcase();

    let completeness = move || ctx.read(|state| state.form_completeness());
    let preview = move || {
        ctx.read(|state| serde_json::to_string_pretty(state.form()))
            .unwrap_or_else(|err| format!("<unprintable: {}>", err))
    };

    view! {
        <section class="profile-form">
            <h3>"Form binding"</h3>

            <TextField field=FormField::Name label="Name" input_type="text" placeholder="Your name" />
            <TextField field=FormField::Email label="Email" input_type="email" placeholder="you@example.com" />

            <label class="form-row">
                <span>"Role"</span>
                <select
                    prop:value=move || ctx.read(|state| state.form().role.clone())
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        ctx.mutate(|state| state.set_form_field(FormField::Role, &value));
                    }
                >
                    {ROLES.iter().map(|(value, label)| view! {
                        <option value=*value>{*label}</option>
                    }).collect_view()}
                </select>
            </label>

            <div class="completeness">
                <div class="completeness-bar">
                    <div class="completeness-fill" style=move || format!("width: {}%;", completeness())></div>
                </div>
                <span class="completeness-label">{move || format!("{}% complete", completeness())}</span>
            </div>

            <pre class="form-preview">{preview}</pre>

            <button class="clear-btn" on:click=move |_| { ctx.mutate(ShowcaseState::clear_form); }>
                "Clear"
            </button>
        </section>
    }
}

#[component]
fn TextField(
    field: FormField,
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    let ctx = use_showcase();

    view! {
        <label class="form-row">
            <span>{label}</span>
            <input
                type=input_type
                name=field.as_str()
                placeholder=placeholder
                prop:value=move || ctx.read(|state| state.form().get(field).to_string())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    ctx.mutate(|state| state.set_form_field(field, &value));
                }
            />
        </label>
    }
}
