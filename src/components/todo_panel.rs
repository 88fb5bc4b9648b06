//! Todo Panel Component
//!
//! Add, complete, remove and filter todos.

use leptos::prelude::*;
use showcase_core::{Filter, ShowcaseState, Todo};
use wasm_bindgen::JsCast;

use crate::context::use_showcase;

#[component]
pub fn TodoPanel() -> impl IntoView {
    let ctx = use_showcase();

    let add_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.mutate(ShowcaseState::submit_new_todo);
    };

    let visible = move || ctx.read(|state| state.visible_todos().into_iter().cloned().collect::<Vec<_>>());

    view! {
        <section class="todo-panel">
            <form class="todo-add-form" on:submit=add_todo>
                <input
                    type="text"
                    placeholder="What needs doing?"
                    prop:value=move || ctx.read(|state| state.new_todo().to_string())
                    on:input=move |ev| {
                        let Some(input) = ev
                            .target()
                            .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
                        else {
                            return;
                        };
                        let text = input.value();
                        ctx.mutate(|state| state.set_new_todo(&text));
                    }
                />
                <button type="submit">"Add"</button>
            </form>

            <div class="filter-row">
                {Filter::ALL.into_iter().map(|filter| {
                    let is_selected = move || ctx.read(|state| state.current_filter()) == filter;
                    view! {
                        <button
                            type="button"
                            class=move || if is_selected() { "filter-btn small active" } else { "filter-btn small" }
                            on:click=move |_| {
                                ctx.mutate(|state| state.set_filter(filter));
                            }
                        >
                            {filter.label()}
                        </button>
                    }
                }).collect_view()}
            </div>

            <ul class="todo-list">
                <For
                    each=visible
                    key=|todo| (todo.id, todo.completed)
                    children=move |todo| view! { <TodoRow todo=todo /> }
                />
            </ul>
            <Show when=move || ctx.read(|state| state.visible_todos().is_empty())>
                <p class="empty-hint">"Nothing here."</p>
            </Show>

            <p class="todo-stats">
                {move || ctx.read(|state| {
                    format!("{} completed, {} pending", state.completed_count(), state.pending_count())
                })}
            </p>
        </section>
    }
}

#[component]
fn TodoRow(todo: Todo) -> impl IntoView {
    let ctx = use_showcase();

    let id = todo.id;
    let completed = todo.completed;

    view! {
        <li class=if completed { "todo-row completed" } else { "todo-row" }>
            <input
                type="checkbox"
                checked=completed
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    ctx.mutate(|state| state.set_todo_completed(id, checked));
                }
            />
            <span class="todo-text">{todo.text}</span>
            <button
                class="delete-btn"
                on:click=move |_| {
                    ctx.mutate(|state| state.remove_todo(id));
                }
            >
                "×"
            </button>
        </li>
    }
}
