//! Pizzeria admin library.
//!
//! Everything behind the admin screens, without the screens themselves:
//!
//! - [`api`]: typed client for the backend REST API
//! - [`store`]: per-page view state and its transitions
//! - [`forms`]: form models, validation and DTO mapping
//! - [`pages`]: page controllers tying the three together
//!
//! The backend is unauthenticated; anyone who can reach it can change the
//! menu and orders.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod config;
pub mod error;
pub mod forms;
pub mod pages;
pub mod state;
pub mod store;

pub use error::AdminError;
pub use state::AppState;
