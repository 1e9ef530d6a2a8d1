//! Pizzeria Core - Shared types library.
//!
//! This crate provides the types shared by every pizzeria admin component:
//! - `admin` - Remote client, view state, form mapping and page controllers
//! - `cli` - Command-line front-end driving the page controllers
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. The DTOs
//! mirror the backend's JSON shapes field for field so they can be sent and
//! received without an intermediate representation.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, prices and search keys
//! - [`models`] - Backend DTOs (menu items, orders, customers, pages)

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod models;
pub mod types;

pub use models::*;
pub use types::*;
