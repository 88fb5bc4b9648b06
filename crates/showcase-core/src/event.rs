//! State Events
//!
//! Every mutation queues the events it caused. Hosts drain the queue after
//! the mutation returns and hand it to the registered watchers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{FormData, Theme};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StateEvent {
    /// Host view was mounted
    Mounted,
    /// Simulated data load after mount finished
    InitialLoadFinished,
    UserStatusChanged {
        id: u32,
        name: String,
        was_active: bool,
        is_active: bool,
    },
    /// Counter value changed; fired for every actual change
    CounterChanged { old: u32, new: u32 },
    /// Reset was requested, whether or not the value moved
    CounterReset,
    /// Whole form value after a field edit
    FormChanged(FormData),
    TodoAdded { id: u32, text: String },
    TodoRemoved { id: u32, text: String },
    TodoStatsUpdated { completed: usize, pending: usize },
    ThemeChanged { theme: Theme },
}

fn online(active: bool) -> &'static str {
    if active {
        "online"
    } else {
        "offline"
    }
}

impl fmt::Display for StateEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateEvent::Mounted => write!(f, "App mounted (the initState of this page)"),
            StateEvent::InitialLoadFinished => write!(f, "Simulated async data load finished"),
            StateEvent::UserStatusChanged {
                name,
                was_active,
                is_active,
                ..
            } => write!(
                f,
                "User {} status changed: {} -> {}",
                name,
                online(*was_active),
                online(*is_active)
            ),
            StateEvent::CounterChanged { old, new } => {
                write!(f, "Counter changed from {} to {}", old, new)
            }
            StateEvent::CounterReset => write!(f, "Counter reset"),
            StateEvent::FormChanged(form) => write!(
                f,
                "Form updated: name={:?}, email={:?}, role={:?}",
                form.name, form.email, form.role
            ),
            StateEvent::TodoAdded { id, text } => write!(f, "Todo #{} added: \"{}\"", id, text),
            StateEvent::TodoRemoved { text, .. } => write!(f, "Todo \"{}\" removed", text),
            StateEvent::TodoStatsUpdated { completed, pending } => write!(
                f,
                "Todo stats updated: {} completed, {} pending",
                completed, pending
            ),
            StateEvent::ThemeChanged { theme } => write!(f, "Theme switched to {}", theme.name()),
        }
    }
}
