//! View controllers
//!
//! One controller per administrative surface. Each owns its record
//! store(s), its active filter state, and the service it mutates
//! through; rendering layers read snapshots and call named operations
//! instead of poking ambient state.

pub mod employees;
pub mod events;
pub mod kitchen;
pub mod menu;
pub mod orders;
pub mod overview;
pub mod tables;

pub use employees::EmployeeDirectory;
pub use events::EventPlanner;
pub use kitchen::KitchenQueue;
pub use menu::MenuBoard;
pub use orders::OrderBoard;
pub use overview::RestaurantOverview;
pub use tables::TablePlan;
