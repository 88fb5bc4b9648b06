//! Theme, progress, display flags, tabs and lifecycle

use super::ShowcaseState;
use crate::domain::{Tab, Theme};
use crate::event::StateEvent;
use crate::progress::{ProgressPhase, ProgressRun, ProgressStep};

impl ShowcaseState {
    // ========================
    // Tabs
    // ========================

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    // ========================
    // Theme
    // ========================

    pub fn current_theme(&self) -> Theme {
        self.current_theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        if self.current_theme == theme {
            return;
        }
        self.current_theme = theme;
        self.emit(StateEvent::ThemeChanged { theme });
    }

    // ========================
    // Progress
    // ========================

    pub fn progress(&self) -> u8 {
        self.progress.value()
    }

    pub fn progress_phase(&self) -> ProgressPhase {
        self.progress.phase()
    }

    pub fn start_progress(&mut self) -> ProgressRun {
        self.progress.start()
    }

    pub fn advance_progress(&mut self, run: ProgressRun) -> ProgressStep {
        self.progress.advance(run)
    }

    pub fn finish_progress(&mut self, run: ProgressRun) -> bool {
        self.progress.finish(run)
    }

    pub fn cancel_progress(&mut self) {
        self.progress.cancel();
    }

    // ========================
    // Display flags
    // ========================

    pub fn show_message(&self) -> bool {
        self.show_message
    }

    pub fn toggle_message(&mut self) {
        self.show_message = !self.show_message;
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.is_loading = loading;
    }

    /// Reserved for an error banner; nothing sets it yet
    pub fn has_error(&self) -> bool {
        self.has_error
    }

    // ========================
    // Lifecycle
    // ========================

    /// Host view is ready
    pub fn mount(&mut self) {
        self.emit(StateEvent::Mounted);
    }

    /// Delayed follow-up scheduled by the host after `mount`
    pub fn finish_initial_load(&mut self) {
        self.emit(StateEvent::InitialLoadFinished);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_change_emits_once() {
        let mut state = ShowcaseState::default();
        state.set_theme(Theme::Light);
        assert!(state.take_events().is_empty());

        state.set_theme(Theme::Dark);
        state.set_theme(Theme::Dark);
        assert_eq!(
            state.take_events(),
            vec![StateEvent::ThemeChanged { theme: Theme::Dark }]
        );
        assert_eq!(state.current_theme(), Theme::Dark);
    }

    #[test]
    fn test_progress_driven_through_state() {
        let mut state = ShowcaseState::default();
        let run = state.start_progress();
        while let ProgressStep::Advanced(_) = state.advance_progress(run) {}
        assert_eq!(state.progress(), 100);
        assert_eq!(state.progress_phase(), ProgressPhase::Cooldown);
        assert!(state.finish_progress(run));
        assert_eq!(state.progress(), 0);
    }

    #[test]
    fn test_flags_and_tabs() {
        let mut state = ShowcaseState::default();
        assert_eq!(state.active_tab(), Tab::List);
        state.select_tab(Tab::Styling);
        assert_eq!(state.active_tab(), Tab::Styling);

        state.toggle_message();
        state.set_loading(true);
        assert!(state.show_message());
        assert!(state.is_loading());
        assert!(!state.has_error());
    }

    #[test]
    fn test_lifecycle_events() {
        let mut state = ShowcaseState::default();
        state.mount();
        state.finish_initial_load();
        assert_eq!(
            state.take_events(),
            vec![StateEvent::Mounted, StateEvent::InitialLoadFinished]
        );
    }
}
