//! Counter Classification

use serde::{Deserialize, Serialize};

/// Four-way bucket for the counter value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CounterStatus {
    Initial,
    Small,
    Medium,
    Large,
}

impl CounterStatus {
    /// 0 → initial, 1..=5 → small, 6..=10 → medium, above → large
    pub fn classify(value: u32) -> Self {
        match value {
            0 => CounterStatus::Initial,
            1..=5 => CounterStatus::Small,
            6..=10 => CounterStatus::Medium,
            _ => CounterStatus::Large,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CounterStatus::Initial => "initial",
            CounterStatus::Small => "small",
            CounterStatus::Medium => "medium",
            CounterStatus::Large => "large",
        }
    }
}
