//! Showcase Errors
//!
//! State operations are total; only parsing at the view boundary and
//! building a state from outside records can fail.

/// Common result type for fallible showcase operations
pub type ShowcaseResult<T> = Result<T, ShowcaseError>;

/// Errors raised when translating view strings, configuration or records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShowcaseError {
    UnknownTheme(String),
    UnknownFilter(String),
    UnknownTab(String),
    InvalidConfig(String),
    /// Two records in a todo list share an id
    DuplicateTodoId(u32),
}

impl std::fmt::Display for ShowcaseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShowcaseError::UnknownTheme(name) => write!(f, "Unknown theme: {}", name),
            ShowcaseError::UnknownFilter(name) => write!(f, "Unknown filter: {}", name),
            ShowcaseError::UnknownTab(id) => write!(f, "Unknown tab: {}", id),
            ShowcaseError::InvalidConfig(msg) => write!(f, "Invalid config: {}", msg),
            ShowcaseError::DuplicateTodoId(id) => write!(f, "Duplicate todo id: {}", id),
        }
    }
}

impl std::error::Error for ShowcaseError {}
