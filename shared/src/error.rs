//! Status transition errors
//!
//! Shared by the kitchen and restaurant order state machines. The client
//! crate wraps these into its own error type at the dispatch boundary.

use thiserror::Error;

/// Rejected status transition
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    /// Target state is not reachable from the current state
    #[error("invalid transition: {from} -> {to}")]
    InvalidTransition { from: String, to: String },

    /// Current state is terminal; no transition may leave it
    #[error("order is already {0}; no further transitions")]
    AlreadyTerminal(String),
}

impl TransitionError {
    pub fn invalid(from: impl ToString, to: impl ToString) -> Self {
        Self::InvalidTransition {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    pub fn terminal(state: impl ToString) -> Self {
        Self::AlreadyTerminal(state.to_string())
    }
}
