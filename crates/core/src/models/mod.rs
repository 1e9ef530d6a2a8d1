//! Backend DTOs.
//!
//! Field names on the wire follow the backend exactly (camelCase, with
//! resource-specific key names such as `idPizza` and `idCustomer`); the
//! Rust field names describe what the value is.

pub mod customer;
pub mod menu_item;
pub mod order;
pub mod page;

pub use customer::Customer;
pub use menu_item::{MenuItem, PriceUpdate};
pub use order::{Order, OrderLine, OrderPayload};
pub use page::Page;
