//! Lotus Client - typed REST clients for the hotel operations backends
//!
//! Provides the client core shared by the four administrative surfaces
//! (employee, event, kitchen and restaurant management): an HTTP layer,
//! per-resource API services, fetch-refreshed record stores with stale
//! response guarding, a confirm-then-refetch mutation dispatcher, and one
//! view controller per surface.

pub mod api;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod http;
pub mod store;
pub mod views;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::{HttpClient, NetworkHttpClient};
pub use store::{FetchTicket, RecordStore};

// Re-export shared types for convenience
pub use shared::models;
