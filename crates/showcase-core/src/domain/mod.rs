//! Domain Layer
//!
//! Records and enumerations shared by the state container and the view.
//! This layer has NO external dependencies (except serde for serialization).

mod counter;
mod filter;
mod form;
mod tab;
mod theme;
mod todo;
mod user;

pub use counter::CounterStatus;
pub use filter::Filter;
pub use form::{FormData, FormField};
pub use tab::Tab;
pub use theme::Theme;
pub use todo::Todo;
pub use user::User;
