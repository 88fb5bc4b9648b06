//! Todo list operations

use super::ShowcaseState;
use crate::domain::{Filter, Todo};
use crate::event::StateEvent;

impl ShowcaseState {
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn current_filter(&self) -> Filter {
        self.current_filter
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.current_filter = filter;
    }

    /// Todos passing `filter`, in list order. Never mutates the list.
    pub fn filtered_todos(&self, filter: Filter) -> Vec<&Todo> {
        self.todos
            .iter()
            .filter(|todo| filter.accepts(todo.completed))
            .collect()
    }

    /// Todos passing the active filter
    pub fn visible_todos(&self) -> Vec<&Todo> {
        self.filtered_todos(self.current_filter)
    }

    pub fn completed_count(&self) -> usize {
        self.todos.iter().filter(|todo| todo.completed).count()
    }

    pub fn pending_count(&self) -> usize {
        self.todos.iter().filter(|todo| !todo.completed).count()
    }

    /// Next id: one past the largest id in the list, 1 for an empty list.
    /// `None` once the largest id is `u32::MAX`.
    pub fn next_todo_id(&self) -> Option<u32> {
        self.todos
            .iter()
            .map(|todo| todo.id)
            .max()
            .unwrap_or(0)
            .checked_add(1)
    }

    /// Append a todo. Blank text, or no id left to hand out, yields `None`.
    pub fn add_todo(&mut self, text: &str) -> Option<u32> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let Some(id) = self.next_todo_id() else {
            tracing::warn!(target: "showcase", "todo ids exhausted, \"{}\" not added", text);
            return None;
        };
        self.todos.push(Todo::new(id, text, false));
        self.emit(StateEvent::TodoAdded {
            id,
            text: text.to_string(),
        });
        Some(id)
    }

    /// Remove the todo with `id`; a missing id is a silent no-op
    pub fn remove_todo(&mut self, id: u32) -> Option<Todo> {
        let index = self.todos.iter().position(|todo| todo.id == id)?;
        let removed = self.todos.remove(index);
        self.emit(StateEvent::TodoRemoved {
            id: removed.id,
            text: removed.text.clone(),
        });
        Some(removed)
    }

    /// Set a todo's completion flag and report the new stats
    pub fn set_todo_completed(&mut self, id: u32, completed: bool) -> bool {
        let Some(todo) = self.todos.iter_mut().find(|todo| todo.id == id) else {
            return false;
        };
        todo.completed = completed;
        let stats = StateEvent::TodoStatsUpdated {
            completed: self.completed_count(),
            pending: self.pending_count(),
        };
        self.emit(stats);
        true
    }

    pub fn toggle_todo(&mut self, id: u32) -> bool {
        match self.todos.iter().find(|todo| todo.id == id) {
            Some(todo) => {
                let completed = !todo.completed;
                self.set_todo_completed(id, completed)
            }
            None => false,
        }
    }

    // ========================
    // Input buffer
    // ========================

    pub fn new_todo(&self) -> &str {
        &self.new_todo
    }

    pub fn set_new_todo(&mut self, text: &str) {
        self.new_todo = text.to_string();
    }

    /// Add the buffered text; the buffer is cleared only when a todo was added
    pub fn submit_new_todo(&mut self) -> Option<u32> {
        let buffered = std::mem::take(&mut self.new_todo);
        let id = self.add_todo(&buffered);
        if id.is_none() {
            self.new_todo = buffered;
        }
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ShowcaseConfig;

    #[test]
    fn test_blank_text_is_ignored() {
        let mut state = ShowcaseState::default();
        assert_eq!(state.add_todo(""), None);
        assert_eq!(state.add_todo("   "), None);
        assert_eq!(state.todos().len(), 3);
        assert!(state.take_events().is_empty());
    }

    #[test]
    fn test_add_trims_and_appends() {
        let mut state = ShowcaseState::default();
        assert_eq!(state.add_todo("  Write docs \n"), Some(4));
        let last = state.todos().last().unwrap();
        assert_eq!(last, &Todo::new(4, "Write docs", false));
    }

    #[test]
    fn test_first_id_in_empty_list_is_one() {
        let mut state =
            ShowcaseState::with_records(Vec::new(), Vec::new(), &ShowcaseConfig::default()).unwrap();
        assert_eq!(state.add_todo("first"), Some(1));
    }

    #[test]
    fn test_add_after_max_id_is_noop() {
        let todos = vec![Todo::new(u32::MAX, "top", false)];
        let mut state =
            ShowcaseState::with_records(Vec::new(), todos, &ShowcaseConfig::default()).unwrap();
        assert_eq!(state.next_todo_id(), None);
        assert_eq!(state.add_todo("next"), None);
        assert_eq!(state.todos().len(), 1);
        assert!(state.take_events().is_empty());

        state.set_new_todo("next");
        assert_eq!(state.submit_new_todo(), None);
        assert_eq!(state.new_todo(), "next");
    }

    #[test]
    fn test_restored_snapshot_at_max_id_does_not_panic() {
        let mut json = serde_json::to_value(ShowcaseState::default()).unwrap();
        json["todos"] = serde_json::json!([{ "id": u32::MAX, "text": "top", "completed": false }]);
        let mut state: ShowcaseState = serde_json::from_value(json).unwrap();
        assert_eq!(state.add_todo("next"), None);
    }

    #[test]
    fn test_remove_missing_is_silent() {
        let mut state = ShowcaseState::default();
        assert_eq!(state.remove_todo(42), None);
        assert_eq!(state.todos().len(), 3);
        assert!(state.take_events().is_empty());
    }

    #[test]
    fn test_filters_partition_the_list() {
        let state = ShowcaseState::default();
        let all = state.filtered_todos(Filter::All);
        let pending = state.filtered_todos(Filter::Pending);
        let completed = state.filtered_todos(Filter::Completed);

        assert_eq!(all.len(), state.todos().len());
        assert!(completed.iter().all(|todo| todo.completed));
        assert!(pending.iter().all(|todo| !todo.completed));
        assert!(pending.iter().all(|p| completed.iter().all(|c| c.id != p.id)));

        let mut union: Vec<u32> = pending.iter().chain(completed.iter()).map(|t| t.id).collect();
        union.sort_unstable();
        let mut ids: Vec<u32> = all.iter().map(|t| t.id).collect();
        ids.sort_unstable();
        assert_eq!(union, ids);
    }

    #[test]
    fn test_counts_ignore_active_filter() {
        let mut state = ShowcaseState::default();
        state.set_filter(Filter::Completed);
        assert_eq!(state.visible_todos().len(), 1);
        assert_eq!(state.completed_count(), 1);
        assert_eq!(state.pending_count(), 2);
    }

    #[test]
    fn test_toggle_reports_stats() {
        let mut state = ShowcaseState::default();
        assert!(state.toggle_todo(2));
        assert_eq!(
            state.take_events(),
            vec![StateEvent::TodoStatsUpdated {
                completed: 2,
                pending: 1
            }]
        );
        assert!(!state.toggle_todo(9));
    }

    #[test]
    fn test_submit_clears_buffer_only_on_success() {
        let mut state = ShowcaseState::default();
        state.set_new_todo("   ");
        assert_eq!(state.submit_new_todo(), None);
        assert_eq!(state.new_todo(), "   ");

        state.set_new_todo("Ship it");
        assert_eq!(state.submit_new_todo(), Some(4));
        assert_eq!(state.new_todo(), "");
    }
}
