//! Counter operations

use super::ShowcaseState;
use crate::domain::CounterStatus;
use crate::event::StateEvent;

impl ShowcaseState {
    pub fn counter(&self) -> u32 {
        self.counter
    }

    pub fn counter_status(&self) -> CounterStatus {
        CounterStatus::classify(self.counter)
    }

    pub fn increment(&mut self) {
        self.set_counter(self.counter.saturating_add(1));
    }

    /// Decrease by one; stays at zero
    pub fn decrement(&mut self) {
        if self.counter > 0 {
            self.set_counter(self.counter - 1);
        }
    }

    pub fn reset(&mut self) {
        self.set_counter(0);
        self.emit(StateEvent::CounterReset);
    }

    fn set_counter(&mut self, new: u32) {
        let old = self.counter;
        if old == new {
            return;
        }
        self.counter = new;
        self.emit(StateEvent::CounterChanged { old, new });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decrement_clamps_at_zero() {
        let mut state = ShowcaseState::default();
        state.decrement();
        assert_eq!(state.counter(), 0);
        assert!(state.take_events().is_empty());
    }

    #[test]
    fn test_watcher_sees_every_change() {
        let mut state = ShowcaseState::default();
        state.increment();
        state.increment();
        state.decrement();
        assert_eq!(
            state.take_events(),
            vec![
                StateEvent::CounterChanged { old: 0, new: 1 },
                StateEvent::CounterChanged { old: 1, new: 2 },
                StateEvent::CounterChanged { old: 2, new: 1 },
            ]
        );
    }

    #[test]
    fn test_reset() {
        let mut state = ShowcaseState::default();
        for _ in 0..7 {
            state.increment();
        }
        assert_eq!(state.counter_status(), CounterStatus::Medium);
        state.take_events();

        state.reset();
        assert_eq!(state.counter(), 0);
        assert_eq!(state.counter_status(), CounterStatus::Initial);
        assert_eq!(
            state.take_events(),
            vec![
                StateEvent::CounterChanged { old: 7, new: 0 },
                StateEvent::CounterReset,
            ]
        );

        // Reset at zero still logs, but nothing changed
        state.reset();
        assert_eq!(state.take_events(), vec![StateEvent::CounterReset]);
    }
}
