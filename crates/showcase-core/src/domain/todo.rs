//! Todo Entity

use serde::{Deserialize, Serialize};

/// A todo record in the interactive tab
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Unique within a list; `add_todo` hands out one past the largest
    pub id: u32,
    /// Trimmed, never empty
    pub text: String,
    pub completed: bool,
}

impl Todo {
    pub fn new(id: u32, text: &str, completed: bool) -> Self {
        Self {
            id,
            text: text.to_string(),
            completed,
        }
    }
}
