//! Todo Filter
//!
//! Non-destructive view selector over the todo list.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ShowcaseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    #[default]
    All,
    Pending,
    Completed,
}

impl Filter {
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Pending, Filter::Completed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Pending => "pending",
            Filter::Completed => "completed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Pending => "Pending",
            Filter::Completed => "Completed",
        }
    }

    /// Whether a todo with the given completion flag passes this filter
    pub fn accepts(&self, completed: bool) -> bool {
        match self {
            Filter::All => true,
            Filter::Pending => !completed,
            Filter::Completed => completed,
        }
    }
}

impl FromStr for Filter {
    type Err = ShowcaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Filter::ALL
            .into_iter()
            .find(|filter| filter.as_str() == s)
            .ok_or_else(|| ShowcaseError::UnknownFilter(s.to_string()))
    }
}
