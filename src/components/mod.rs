//! UI Components
//!
//! One component per example panel plus the shared chrome.

mod counter_panel;
mod event_log;
mod profile_form;
mod styling_panel;
mod tab_bar;
mod todo_panel;
mod user_list;

pub use counter_panel::CounterPanel;
pub use event_log::EventLog;
pub use profile_form::ProfileForm;
pub use styling_panel::StylingPanel;
pub use tab_bar::TabBar;
pub use todo_panel::TodoPanel;
pub use user_list::UserList;
