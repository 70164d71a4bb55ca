//! Shared types for the Lotus hotel operations suite
//!
//! Common types used across the client crates: domain models, status
//! state machines, wire envelope structures, and the pure filter and
//! aggregation engines the view layers are built on.

pub mod error;
pub mod filter;
pub mod models;
pub mod response;
pub mod stats;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::TransitionError;
pub use filter::RecordFilter;
pub use response::{Envelope, ErrorBody};
pub use stats::StatsError;
