//! Todo list property tests
//!
//! Arbitrary add/remove/toggle sequences over arbitrary starting lists.

use std::collections::HashSet;

use proptest::prelude::*;
use showcase_core::{Filter, ShowcaseConfig, ShowcaseState, Todo};

#[derive(Debug, Clone)]
enum TodoOp {
    Add(String),
    Remove(u32),
    Toggle(u32),
}

fn todo_op() -> impl Strategy<Value = TodoOp> {
    prop_oneof![
        "[a-z ]{0,8}".prop_map(TodoOp::Add),
        (0u32..24).prop_map(TodoOp::Remove),
        (0u32..24).prop_map(TodoOp::Toggle),
    ]
}

/// Starting list with ids 1..=n and the given completion flags
fn state_from_flags(flags: &[bool]) -> ShowcaseState {
    let todos = flags
        .iter()
        .enumerate()
        .map(|(i, completed)| Todo::new(i as u32 + 1, &format!("seed {}", i), *completed))
        .collect();
    ShowcaseState::with_records(Vec::new(), todos, &ShowcaseConfig::default())
        .expect("sequential ids are distinct")
}

fn ids(todos: &[&Todo]) -> Vec<u32> {
    let mut ids: Vec<u32> = todos.iter().map(|todo| todo.id).collect();
    ids.sort_unstable();
    ids
}

proptest! {
    /// Ids stay distinct and positive after every step
    #[test]
    fn prop_ids_stay_unique(
        flags in prop::collection::vec(any::<bool>(), 0..8),
        ops in prop::collection::vec(todo_op(), 0..60),
    ) {
        let mut state = state_from_flags(&flags);

        for op in ops {
            let before = state.todos().len();
            match op {
                TodoOp::Add(text) => {
                    let added = state.add_todo(&text);
                    if text.trim().is_empty() {
                        prop_assert_eq!(added, None);
                        prop_assert_eq!(state.todos().len(), before);
                    } else {
                        prop_assert!(added.is_some());
                        prop_assert_eq!(state.todos().len(), before + 1);
                    }
                }
                TodoOp::Remove(id) => {
                    let removed = state.remove_todo(id);
                    prop_assert_eq!(removed.is_some(), state.todos().len() + 1 == before);
                }
                TodoOp::Toggle(id) => {
                    state.toggle_todo(id);
                }
            }

            let seen: HashSet<u32> = state.todos().iter().map(|todo| todo.id).collect();
            prop_assert_eq!(seen.len(), state.todos().len());
            prop_assert!(state.todos().iter().all(|todo| todo.id >= 1));
        }
    }

    /// Pending and Completed split the full list with no overlap
    #[test]
    fn prop_filters_partition_list(
        flags in prop::collection::vec(any::<bool>(), 0..16),
        ops in prop::collection::vec(todo_op(), 0..30),
    ) {
        let mut state = state_from_flags(&flags);
        for op in ops {
            match op {
                TodoOp::Add(text) => { state.add_todo(&text); }
                TodoOp::Remove(id) => { state.remove_todo(id); }
                TodoOp::Toggle(id) => { state.toggle_todo(id); }
            }
        }

        let all = state.filtered_todos(Filter::All);
        let pending = state.filtered_todos(Filter::Pending);
        let completed = state.filtered_todos(Filter::Completed);

        prop_assert!(completed.iter().all(|todo| todo.completed));
        prop_assert!(pending.iter().all(|todo| !todo.completed));

        let pending_ids: HashSet<u32> = pending.iter().map(|todo| todo.id).collect();
        prop_assert!(completed.iter().all(|todo| !pending_ids.contains(&todo.id)));

        let mut union = pending.clone();
        union.extend(completed.iter().copied());
        prop_assert_eq!(ids(&union), ids(&all));
        prop_assert_eq!(all.len(), state.todos().len());
        prop_assert_eq!(completed.len(), state.completed_count());
        prop_assert_eq!(pending.len(), state.pending_count());
    }
}
