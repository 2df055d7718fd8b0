//! Error types for intake core operations.
//!
//! Errors fall into two categories: validation failures the user recovers
//! from by retyping the field, and engine errors that indicate a contract
//! violation between the pipeline and the state machine. The CLI re-prompts
//! on the former and aborts on the latter.

use thiserror::Error;

use crate::machine::{Command, State};

/// Result type alias for intake operations.
pub type Result<T> = std::result::Result<T, IntakeError>;

/// Core error type for intake operations.
#[derive(Debug, Error)]
pub enum IntakeError {
    /// Rejected user input
    #[error("{0}")]
    Validation(String),

    /// No transition registered for the state/command pair
    #[error("Invalid transition: {state:?} -> {command:?}")]
    InvalidTransition { state: State, command: Command },

    /// The state has no registered prompt text
    #[error("State {0:?} has no prompt registered")]
    MissingPrompt(State),

    /// Record store failure
    #[error("Storage error: {0}")]
    Storage(String),
}

impl IntakeError {
    /// True for errors the user can recover from by retrying the field.
    /// Everything else is a defect and must not be swallowed.
    pub fn is_user_error(&self) -> bool {
        matches!(self, IntakeError::Validation(_))
    }
}

impl From<std::io::Error> for IntakeError {
    fn from(err: std::io::Error) -> Self {
        IntakeError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for IntakeError {
    fn from(err: serde_json::Error) -> Self {
        IntakeError::Storage(err.to_string())
    }
}
