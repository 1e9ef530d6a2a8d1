//! Subcommand implementations, one module per resource.

pub mod customers;
pub mod menu;
pub mod orders;
