//! Errors raised by state machine operations.

use thiserror::Error;

/// Errors that can occur when configuring or driving a state machine.
///
/// Any operation that returns one of these leaves the machine exactly as
/// it was before the call.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MachineError {
    #[error("State machine has no state. Call .add_state(state) first")]
    Uninitialized,

    #[error("Unknown state '{state}'")]
    UnknownState { state: String },

    #[error("Cannot add transition '{from}' -> '{to}': state '{missing}' is not registered")]
    UnknownTransitionEndpoint {
        from: String,
        to: String,
        missing: String,
    },

    #[error("State '{state}' is already registered")]
    DuplicateState { state: String },
}

impl MachineError {
    /// True for every variant caused by an unregistered label.
    pub fn is_unknown_state(&self) -> bool {
        matches!(
            self,
            Self::UnknownState { .. } | Self::UnknownTransitionEndpoint { .. }
        )
    }
}

pub type MachineResult<T> = Result<T, MachineError>;
