//! Integration tests for the pizzeria admin client.
//!
//! # Running Tests
//!
//! ```bash
//! # Offline tests only
//! cargo test -p pizzeria-integration-tests
//!
//! # Include the read-only tests against a live backend
//! PIZZERIA_API_URL=http://localhost:8080/api \
//!     cargo test -p pizzeria-integration-tests -- --include-ignored
//! ```
//!
//! Live tests only read; they never create, update or delete.

#![cfg_attr(not(test), forbid(unsafe_code))]

use pizzeria_admin::AppState;
use pizzeria_admin::config::AdminConfig;

/// State for the backend named by the environment (or the default backend).
///
/// # Panics
///
/// Panics if the configuration is invalid or the HTTP client cannot be built.
#[must_use]
#[allow(clippy::expect_used)]
pub fn live_state() -> AppState {
    let config = AdminConfig::from_env().expect("Invalid configuration");
    AppState::from_config(config).expect("Failed to build HTTP client")
}

/// State pointing at a port nothing listens on.
///
/// Any request sent through it fails with a network error, so a test can
/// tell whether an action reached the network.
///
/// # Panics
///
/// Panics if the HTTP client cannot be built.
#[must_use]
#[allow(clippy::expect_used)]
pub fn unreachable_state() -> AppState {
    let config = AdminConfig::from_lookup(|key| {
        (key == "PIZZERIA_API_URL").then(|| "http://127.0.0.1:9/api".to_string())
    })
    .expect("Invalid configuration");
    AppState::from_config(config).expect("Failed to build HTTP client")
}
