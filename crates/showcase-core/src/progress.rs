//! Progress Animation State Machine
//!
//! `Idle(0) → Running(step..100) → Cooldown(100) → Idle(0)`.
//!
//! The host drives the machine from timers. Each start hands out a
//! [`ProgressRun`] token; restarting or cancelling bumps the generation so
//! callbacks still holding an older token become no-ops.

use serde::{Deserialize, Serialize};

/// Upper bound of the bar
pub const PROGRESS_MAX: u8 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgressPhase {
    #[default]
    Idle,
    Running,
    Cooldown,
}

/// Handle for one animation run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressRun(u64);

/// Result of a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressStep {
    Advanced(u8),
    /// Reached the top; the host should wait out the cooldown
    Finished,
    /// The run was restarted or cancelled; the host should stop ticking
    Stale,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressDemo {
    value: u8,
    phase: ProgressPhase,
    step: u8,
    generation: u64,
}

impl Default for ProgressDemo {
    fn default() -> Self {
        Self::new(10)
    }
}

impl ProgressDemo {
    pub fn new(step: u8) -> Self {
        Self {
            value: 0,
            phase: ProgressPhase::Idle,
            step: step.clamp(1, PROGRESS_MAX),
            generation: 0,
        }
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn phase(&self) -> ProgressPhase {
        self.phase
    }

    pub fn is_idle(&self) -> bool {
        self.phase == ProgressPhase::Idle
    }

    /// Begin a run from 0. A run already in flight is superseded.
    pub fn start(&mut self) -> ProgressRun {
        if !self.is_idle() {
            tracing::debug!(target: "showcase", "progress restarted at {}%", self.value);
        }
        self.generation += 1;
        self.value = 0;
        self.phase = ProgressPhase::Running;
        ProgressRun(self.generation)
    }

    pub fn advance(&mut self, run: ProgressRun) -> ProgressStep {
        if !self.is_current(run) || self.phase != ProgressPhase::Running {
            return ProgressStep::Stale;
        }
        self.value = self.value.saturating_add(self.step).min(PROGRESS_MAX);
        if self.value >= PROGRESS_MAX {
            self.phase = ProgressPhase::Cooldown;
            ProgressStep::Finished
        } else {
            ProgressStep::Advanced(self.value)
        }
    }

    /// End the cooldown. Returns false for a stale handle.
    pub fn finish(&mut self, run: ProgressRun) -> bool {
        if !self.is_current(run) || self.phase != ProgressPhase::Cooldown {
            return false;
        }
        self.value = 0;
        self.phase = ProgressPhase::Idle;
        true
    }

    /// Abort whatever run is in flight
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.value = 0;
        self.phase = ProgressPhase::Idle;
    }

    fn is_current(&self, run: ProgressRun) -> bool {
        run.0 == self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_cycle() {
        let mut demo = ProgressDemo::default();
        let run = demo.start();

        for expected in (10..100).step_by(10) {
            assert_eq!(demo.advance(run), ProgressStep::Advanced(expected as u8));
        }
        assert_eq!(demo.advance(run), ProgressStep::Finished);
        assert_eq!(demo.value(), 100);
        assert_eq!(demo.phase(), ProgressPhase::Cooldown);

        // Ticks during cooldown do nothing
        assert_eq!(demo.advance(run), ProgressStep::Stale);
        assert_eq!(demo.value(), 100);

        assert!(demo.finish(run));
        assert_eq!(demo.value(), 0);
        assert!(demo.is_idle());
    }

    #[test]
    fn test_restart_invalidates_old_run() {
        let mut demo = ProgressDemo::default();
        let first = demo.start();
        demo.advance(first);
        demo.advance(first);
        assert_eq!(demo.value(), 20);

        let second = demo.start();
        assert_eq!(demo.value(), 0);
        assert_eq!(demo.advance(first), ProgressStep::Stale);
        assert_eq!(demo.value(), 0);
        assert_eq!(demo.advance(second), ProgressStep::Advanced(10));
        assert!(!demo.finish(first));
    }

    #[test]
    fn test_step_that_overshoots_is_clamped() {
        let mut demo = ProgressDemo::new(30);
        let run = demo.start();
        assert_eq!(demo.advance(run), ProgressStep::Advanced(30));
        assert_eq!(demo.advance(run), ProgressStep::Advanced(60));
        assert_eq!(demo.advance(run), ProgressStep::Advanced(90));
        assert_eq!(demo.advance(run), ProgressStep::Finished);
        assert_eq!(demo.value(), PROGRESS_MAX);
    }

    #[test]
    fn test_cancel() {
        let mut demo = ProgressDemo::default();
        let run = demo.start();
        demo.advance(run);
        demo.cancel();
        assert!(demo.is_idle());
        assert_eq!(demo.value(), 0);
        assert_eq!(demo.advance(run), ProgressStep::Stale);
    }
}
