//! Remote resource client for the pizzeria backend.
//!
//! Provides typed access to the three REST resources the admin pages use:
//!
//! - **Menu items** (`/pizzas`): paginated listing, lookups, create/update,
//!   partial price update, delete
//! - **Orders** (`/orders`): listing (all, today, outside hours),
//!   create/update, delete
//! - **Customers** (`/customers`): listing and phone lookup
//!
//! # Error model
//!
//! Failures are opaque: a non-2xx response becomes
//! [`ApiError::Server`] carrying only the status code, and the backend's
//! error body is dropped. Callers turn any error into one generic feedback
//! message. Nothing here retries.
//!
//! # Example
//!
//! ```rust,ignore
//! use pizzeria_admin::api::{ApiClient, ReqwestTransport};
//!
//! let client = ApiClient::new(ReqwestTransport::new()?, &config.api_url);
//! let page = client.list_menu_items(0, 20).await?;
//! ```

mod client;
mod customers;
mod error;
mod menu_items;
mod orders;

#[cfg(test)]
pub(crate) mod testing;

pub use client::{ApiClient, ApiRequest, ApiResponse, ReqwestTransport, Transport};
pub use error::ApiError;
pub use menu_items::SortDirection;
