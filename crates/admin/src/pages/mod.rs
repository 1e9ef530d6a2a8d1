//! Page controllers.
//!
//! A page owns a client handle, its [`ViewState`] and its form. Actions take
//! `&mut self`, run at most one request chain, and report how they ended as
//! an [`Outcome`]; the user-facing message is in the page's feedback.

mod customers;
mod menu_items;
mod orders;

use std::future::Future;

use tracing::warn;

use crate::api::ApiError;
use crate::forms::ValidationErrors;
use crate::store::{StoreEvent, ViewState};

pub use customers::CustomersPage;
pub use menu_items::MenuItemsPage;
pub use orders::OrdersPage;

/// How an action ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The request chain succeeded.
    Completed,
    /// Input was invalid; nothing was sent.
    Rejected,
    /// A request failed.
    Failed,
    /// The user declined a confirmation; nothing changed.
    Cancelled,
}

impl Outcome {
    #[must_use]
    pub const fn is_completed(self) -> bool {
        matches!(self, Self::Completed)
    }
}

/// Asks the user to confirm a destructive action.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F: Fn(&str) -> bool> Confirm for F {
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Feedback shown when a form fails validation.
pub(crate) fn invalid_form_message(errors: &ValidationErrors) -> String {
    format!("Please correct the form: {}.", errors.summary())
}

/// Run a read and replace the list with its result.
pub(crate) async fn load_list<T, Id>(
    state: &mut ViewState<T, Id>,
    request: impl Future<Output = Result<Vec<T>, ApiError>>,
    describe: impl FnOnce(&[T]) -> String,
    failure: &str,
    clear_on_failure: bool,
) -> Outcome {
    state.dispatch(StoreEvent::LoadStarted);
    match request.await {
        Ok(items) => {
            let message = describe(&items);
            state.dispatch(StoreEvent::Loaded { items, message });
            Outcome::Completed
        }
        Err(e) => {
            warn!(error = %e, "{failure}");
            state.dispatch(StoreEvent::Failed {
                message: failure.to_string(),
                clear_items: clear_on_failure,
            });
            Outcome::Failed
        }
    }
}

/// Run a mutation, then refresh the list.
///
/// The success message survives a failed refresh; the stale list is kept.
pub(crate) async fn mutate_then_reload<T, Id, R>(
    state: &mut ViewState<T, Id>,
    mutation: impl Future<Output = Result<R, ApiError>>,
    reload: impl Future<Output = Result<Vec<T>, ApiError>>,
    success: &str,
    failure: &str,
) -> Outcome {
    state.dispatch(StoreEvent::SubmitStarted);
    if let Err(e) = mutation.await {
        warn!(error = %e, "{failure}");
        state.dispatch(StoreEvent::Failed {
            message: failure.to_string(),
            clear_items: false,
        });
        return Outcome::Failed;
    }

    state.dispatch(StoreEvent::LoadStarted);
    match reload.await {
        Ok(items) => state.dispatch(StoreEvent::Loaded {
            items,
            message: success.to_string(),
        }),
        Err(e) => {
            warn!(error = %e, "Refresh after a successful change failed");
            state.dispatch(StoreEvent::Succeeded(success.to_string()));
        }
    }
    Outcome::Completed
}
