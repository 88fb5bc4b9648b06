//! Showcase Core
//!
//! State model behind the reactive showcase: the records each example tab
//! renders, derived values computed on read, mutation methods that queue
//! [`StateEvent`]s, and the [`Watchers`] list that observes them.
//!
//! Nothing here touches the DOM or timers; the view layer drives both.

pub mod config;
pub mod domain;
pub mod error;
pub mod event;
pub mod progress;
pub mod state;
pub mod watch;


pub use config::ShowcaseConfig;
pub use domain::{CounterStatus, Filter, FormData, FormField, Tab, Theme, Todo, User};
pub use error::{ShowcaseError, ShowcaseResult};
pub use event::StateEvent;
pub use progress::{ProgressPhase, ProgressRun, ProgressStep, PROGRESS_MAX};
pub use state::ShowcaseState;
pub use watch::{log_event, Watchers};
