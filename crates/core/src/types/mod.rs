//! Core value types for the pizzeria admin client.
//!
//! This module provides type-safe wrappers for IDs, prices and search keys.

pub mod id;
pub mod price;
pub mod search;

pub use id::*;
pub use price::{Price, PriceError};
pub use search::{SearchKey, SearchKeyError};
