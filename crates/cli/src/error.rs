//! CLI error type.

use pizzeria_admin::AdminError;
use pizzeria_admin::pages::Outcome;
use pizzeria_admin::store::ViewState;
use thiserror::Error;

/// Why a command exited unsuccessfully.
#[derive(Debug, Error)]
pub enum CliError {
    /// Start-up failed.
    #[error(transparent)]
    Admin(#[from] AdminError),

    /// The action was rejected locally or failed at the backend.
    #[error("{0}")]
    Action(String),
}

/// Turn an action's outcome into a command result.
///
/// A declined confirmation is not an error.
pub fn check<T, Id>(outcome: Outcome, state: &ViewState<T, Id>) -> Result<(), CliError> {
    match outcome {
        Outcome::Completed | Outcome::Cancelled => Ok(()),
        Outcome::Rejected | Outcome::Failed => Err(CliError::Action(
            state.feedback().unwrap_or("Action failed").to_string(),
        )),
    }
}
