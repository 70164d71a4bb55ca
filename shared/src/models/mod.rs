//! Data models
//!
//! Shared between the client crates and the backend services (via API).
//! All IDs are `i64`, assigned by the backend. Status fields are closed
//! enums wire-encoded as SCREAMING_SNAKE_CASE strings; create/update
//! payloads are validated at the backend boundary before a request is
//! issued.

pub mod dining_table;
pub mod employee;
pub mod event;
pub mod kitchen_menu;
pub mod kitchen_order;
pub mod menu_item;
pub mod order;
pub mod statistics;

// Re-exports
pub use dining_table::*;
pub use employee::*;
pub use event::*;
pub use kitchen_menu::*;
pub use kitchen_order::*;
pub use menu_item::*;
pub use order::*;
pub use statistics::*;
