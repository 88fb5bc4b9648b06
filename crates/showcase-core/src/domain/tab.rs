//! Example Tabs
//!
//! View routing between the four example panels.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ShowcaseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    /// List rendering
    #[default]
    List,
    /// Counter and form binding
    State,
    /// Todo CRUD
    Interactive,
    /// Themes, progress and conditional rendering
    Styling,
}

impl Tab {
    /// Display order of the tab bar
    pub const ALL: [Tab; 4] = [Tab::List, Tab::State, Tab::Interactive, Tab::Styling];

    pub fn id(&self) -> &'static str {
        match self {
            Tab::List => "list",
            Tab::State => "state",
            Tab::Interactive => "interactive",
            Tab::Styling => "styling",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tab::List => "List Rendering",
            Tab::State => "State",
            Tab::Interactive => "Interaction",
            Tab::Styling => "Dynamic Styling",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Tab::List => "📝 Example 1: Rendering a list (like a ListView)",
            Tab::State => "🔄 Example 2: State management (like setState)",
            Tab::Interactive => "⚡ Example 3: Interactive CRUD",
            Tab::Styling => "🎨 Example 4: Dynamic styling and conditional rendering",
        }
    }
}

impl FromStr for Tab {
    type Err = ShowcaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tab::ALL
            .into_iter()
            .find(|tab| tab.id() == s)
            .ok_or_else(|| ShowcaseError::UnknownTab(s.to_string()))
    }
}
