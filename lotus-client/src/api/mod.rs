//! Typed resource services
//!
//! One service per backend, mirroring its REST surface. Create/update
//! payloads are validated locally before a request is issued; everything
//! else is a thin typed pass-through over the HTTP layer.

pub mod employees;
pub mod events;
pub mod kitchen;
pub mod menu;
pub mod orders;
pub mod tables;

pub use employees::EmployeeService;
pub use events::EventService;
pub use kitchen::KitchenService;
pub use menu::MenuService;
pub use orders::OrderService;
pub use tables::TableService;
