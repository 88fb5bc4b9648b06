//! User List Component
//!
//! Keyed list rendering over the roster with a per-row status toggle.

use leptos::prelude::*;
use showcase_core::User;

use crate::context::use_showcase;

#[component]
pub fn UserList() -> impl IntoView {
    let ctx = use_showcase();

    view! {
        <section class="user-list">
            <p class="list-summary">
                {move || ctx.read(|state| {
                    format!("{} of {} users online", state.active_user_count(), state.users().len())
                })}
            </p>
            // Keyed on status too, so a toggled row is rebuilt
            <For
                each=move || ctx.read(|state| state.users().to_vec())
                key=|user| (user.id, user.is_active)
                children=move |user| view! { <UserCard user=user /> }
            />
        </section>
    }
}

#[component]
fn UserCard(user: User) -> impl IntoView {
    let ctx = use_showcase();

    let id = user.id;
    let is_active = user.is_active;
    let status = user.status_label();
    let alt = user.name.clone();

    view! {
        <div class=if is_active { "user-card active" } else { "user-card" }>
            <img class="user-avatar" src=user.avatar_url alt=alt />
            <div class="user-info">
                <h3>{user.name}</h3>
                <p class="user-email">{user.email}</p>
            </div>
            <span class=format!("status-badge {}", status)>{status}</span>
            <button
                class="toggle-status-btn"
                on:click=move |_| {
                    ctx.mutate(|state| state.toggle_user_status(id));
                }
            >
                {if is_active { "Go offline" } else { "Go online" }}
            </button>
        </div>
    }
}
