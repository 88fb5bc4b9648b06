//! Showcase State Container
//!
//! All data behind the four example tabs. Derived values are plain methods
//! evaluated on read. Mutations queue [`StateEvent`]s which the host drains
//! with [`ShowcaseState::take_events`] and hands to its watchers.

mod counter;
mod form;
mod roster;
mod styling;
mod todos;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::config::ShowcaseConfig;
use crate::domain::{FormData, Filter, Tab, Theme, Todo, User};
use crate::error::{ShowcaseError, ShowcaseResult};
use crate::event::StateEvent;
use crate::progress::ProgressDemo;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StateSnapshot")]
pub struct ShowcaseState {
    active_tab: Tab,

    // List rendering
    users: Vec<User>,

    // State management
    counter: u32,
    form: FormData,

    // CRUD
    todos: Vec<Todo>,
    new_todo: String,
    current_filter: Filter,

    // Dynamic styling
    current_theme: Theme,
    #[serde(skip)]
    progress: ProgressDemo,
    show_message: bool,
    is_loading: bool,
    has_error: bool,

    #[serde(skip)]
    pending_events: Vec<StateEvent>,
}

impl Default for ShowcaseState {
    fn default() -> Self {
        Self::new(&ShowcaseConfig::default())
    }
}

impl ShowcaseState {
    /// Seeded state: four users, three todos, everything else at rest
    pub fn new(config: &ShowcaseConfig) -> Self {
        Self::build(seed_users(), seed_todos(), config)
    }

    /// State over caller-supplied records. Fails if two todos share an id.
    pub fn with_records(
        users: Vec<User>,
        todos: Vec<Todo>,
        config: &ShowcaseConfig,
    ) -> ShowcaseResult<Self> {
        check_unique_ids(&todos)?;
        Ok(Self::build(users, todos, config))
    }

    fn build(users: Vec<User>, todos: Vec<Todo>, config: &ShowcaseConfig) -> Self {
        Self {
            active_tab: Tab::default(),
            users,
            counter: 0,
            form: FormData::default(),
            todos,
            new_todo: String::new(),
            current_filter: Filter::default(),
            current_theme: Theme::default(),
            progress: ProgressDemo::new(config.progress_step),
            show_message: false,
            is_loading: false,
            has_error: false,
            pending_events: Vec::new(),
        }
    }

    /// Drain the events queued since the last call
    pub fn take_events(&mut self) -> Vec<StateEvent> {
        std::mem::take(&mut self.pending_events)
    }

    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    fn emit(&mut self, event: StateEvent) {
        tracing::trace!(target: "showcase", ?event, "queued");
        self.pending_events.push(event);
    }
}

fn check_unique_ids(todos: &[Todo]) -> ShowcaseResult<()> {
    let mut seen = HashSet::with_capacity(todos.len());
    match todos.iter().find(|todo| !seen.insert(todo.id)) {
        Some(duplicate) => Err(ShowcaseError::DuplicateTodoId(duplicate.id)),
        None => Ok(()),
    }
}

/// Serialized form of [`ShowcaseState`]; checked before it becomes one
#[derive(Deserialize)]
struct StateSnapshot {
    active_tab: Tab,
    users: Vec<User>,
    counter: u32,
    form: FormData,
    todos: Vec<Todo>,
    new_todo: String,
    current_filter: Filter,
    current_theme: Theme,
    show_message: bool,
    is_loading: bool,
    has_error: bool,
}

impl TryFrom<StateSnapshot> for ShowcaseState {
    type Error = ShowcaseError;

    fn try_from(snapshot: StateSnapshot) -> Result<Self, Self::Error> {
        let mut state =
            Self::with_records(snapshot.users, snapshot.todos, &ShowcaseConfig::default())?;
        state.active_tab = snapshot.active_tab;
        state.counter = snapshot.counter;
        state.form = snapshot.form;
        state.new_todo = snapshot.new_todo;
        state.current_filter = snapshot.current_filter;
        state.current_theme = snapshot.current_theme;
        state.show_message = snapshot.show_message;
        state.is_loading = snapshot.is_loading;
        state.has_error = snapshot.has_error;
        Ok(state)
    }
}

fn seed_users() -> Vec<User> {
    vec![
        User::new(1, "Zhang San", "zhangsan@example.com", true),
        User::new(2, "Li Si", "lisi@example.com", false),
        User::new(3, "Wang Wu", "wangwu@example.com", true),
        User::new(4, "Zhao Liu", "zhaoliu@example.com", false),
    ]
}

fn seed_todos() -> Vec<Todo> {
    vec![
        Todo::new(1, "Learn basics", true),
        Todo::new(2, "Understand components", false),
        Todo::new(3, "Master state", false),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_records_rejects_duplicate_ids() {
        let todos = vec![Todo::new(1, "a", false), Todo::new(1, "b", false)];
        let result = ShowcaseState::with_records(Vec::new(), todos, &ShowcaseConfig::default());
        assert_eq!(result, Err(ShowcaseError::DuplicateTodoId(1)));
    }

    #[test]
    fn test_with_records_accepts_distinct_ids() {
        let todos = vec![Todo::new(7, "a", true), Todo::new(3, "b", false)];
        let state = ShowcaseState::with_records(seed_users(), todos, &ShowcaseConfig::default())
            .unwrap();
        assert_eq!(state.todos().len(), 2);
        assert_eq!(state.next_todo_id(), Some(8));
    }

    #[test]
    fn test_snapshot_round_trip_keeps_fields() {
        let mut state = ShowcaseState::default();
        state.increment();
        state.set_theme(Theme::Dark);
        state.take_events();

        let json = serde_json::to_string(&state).unwrap();
        let restored: ShowcaseState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, state);
    }

    #[test]
    fn test_snapshot_with_duplicate_ids_is_rejected() {
        let mut json = serde_json::to_value(ShowcaseState::default()).unwrap();
        json["todos"] = serde_json::json!([
            { "id": 2, "text": "a", "completed": false },
            { "id": 2, "text": "b", "completed": true },
        ]);

        let err = serde_json::from_value::<ShowcaseState>(json).unwrap_err();
        assert!(err.to_string().contains("Duplicate todo id: 2"));
    }
}
