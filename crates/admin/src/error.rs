//! Unified error handling for admin start-up paths.

use thiserror::Error;

use crate::api::ApiError;
use crate::config::ConfigError;

/// Errors that stop the admin client from starting or running a command.
///
/// Page actions never return this; they report failures through their
/// feedback message instead.
#[derive(Debug, Error)]
pub enum AdminError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The backend could not be reached or answered with an error.
    #[error("Backend error: {0}")]
    Api(#[from] ApiError),
}
