//! Showcase Configuration
//!
//! Timing and capacity knobs for the demo. Every field has a default so a
//! partial JSON document is enough to override one value.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ShowcaseError, ShowcaseResult};

/// Runtime knobs for timers and the on-page event log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowcaseConfig {
    /// Progress added per animation tick
    pub progress_step: u8,
    /// Delay between animation ticks
    pub progress_tick_ms: u32,
    /// Pause at 100% before the bar drops back to 0
    pub progress_cooldown_ms: u32,
    /// Delay of the simulated data load after mount
    pub mount_log_delay_ms: u32,
    /// Lines kept in the on-page event log
    pub event_log_capacity: usize,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            progress_step: 10,
            progress_tick_ms: 100,
            progress_cooldown_ms: 1000,
            mount_log_delay_ms: 1000,
            event_log_capacity: 50,
        }
    }
}

impl ShowcaseConfig {
    /// Parse a JSON override; missing fields keep their defaults
    pub fn from_json(raw: &str) -> ShowcaseResult<Self> {
        let config: ShowcaseConfig =
            serde_json::from_str(raw).map_err(|e| ShowcaseError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> ShowcaseResult<()> {
        if self.progress_step == 0 || self.progress_step > 100 {
            return Err(ShowcaseError::InvalidConfig(format!(
                "progress_step must be in 1..=100, got {}",
                self.progress_step
            )));
        }
        if self.event_log_capacity == 0 {
            return Err(ShowcaseError::InvalidConfig(
                "event_log_capacity must be positive".to_string(),
            ));
        }
        Ok(())
    }

    pub fn progress_tick(&self) -> Duration {
        Duration::from_millis(self.progress_tick_ms.into())
    }

    pub fn progress_cooldown(&self) -> Duration {
        Duration::from_millis(self.progress_cooldown_ms.into())
    }

    pub fn mount_log_delay(&self) -> Duration {
        Duration::from_millis(self.mount_log_delay_ms.into())
    }
}
