//! Client error types

use shared::{StatsError, TransitionError};
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request did not complete
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Payload rejected, locally or by the backend
    #[error("Validation error: {0}")]
    Validation(String),

    /// Backend reported a failure not covered by a more specific variant
    #[error("Request failed ({status}): {message}")]
    Api { status: u16, message: String },

    /// Status transition violates the state machine rules (no request issued)
    #[error(transparent)]
    InvalidTransition(#[from] TransitionError),

    /// Backend refused a transition the client considered legal
    #[error("Transition rejected: {0}")]
    TransitionRejected(String),

    /// Aggregation over no data
    #[error(transparent)]
    Stats(#[from] StatsError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<validator::ValidationErrors> for ClientError {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::Validation(err.to_string())
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
