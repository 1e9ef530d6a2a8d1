//! Customer lookup page.

use pizzeria_core::{Customer, CustomerId};
use tracing::instrument;

use super::{Outcome, invalid_form_message, load_list};
use crate::api::{ApiClient, Transport};
use crate::forms::PhoneSearchForm;
use crate::store::{StoreEvent, ViewState};

/// Controller for the customers page.
#[derive(Debug)]
pub struct CustomersPage<T> {
    api: ApiClient<T>,
    state: ViewState<Customer, CustomerId>,
    pub form: PhoneSearchForm,
}

impl<T: Transport> CustomersPage<T> {
    #[must_use]
    pub fn new(api: ApiClient<T>) -> Self {
        Self {
            api,
            state: ViewState::new(),
            form: PhoneSearchForm::default(),
        }
    }

    #[must_use]
    pub const fn state(&self) -> &ViewState<Customer, CustomerId> {
        &self.state
    }

    #[instrument(skip(self))]
    pub async fn load_all(&mut self) -> Outcome {
        let api = &self.api;
        load_list(
            &mut self.state,
            api.list_customers(),
            |customers| format!("{} customers loaded.", customers.len()),
            "Could not load customers.",
            false,
        )
        .await
    }

    /// Look up the customer whose phone number is in the form.
    ///
    /// The previous result is dropped before the request is sent.
    #[instrument(skip(self))]
    pub async fn search_by_phone(&mut self) -> Outcome {
        let phone = match self.form.to_key() {
            Ok(phone) => phone,
            Err(errors) => {
                self.form.mark_all_touched();
                self.state
                    .dispatch(StoreEvent::Rejected(invalid_form_message(&errors)));
                return Outcome::Rejected;
            }
        };

        self.state.dispatch(StoreEvent::Cleared);
        let api = &self.api;
        load_list(
            &mut self.state,
            async { api.customer_by_phone(&phone).await.map(Vec::from_iter) },
            |found| match found.first() {
                Some(customer) => format!("Found {}.", customer.name),
                None => format!("No customer has phone number {phone}."),
            },
            "Could not search for the customer.",
            true,
        )
        .await
    }

    /// Reset the search and drop the result.
    pub fn clear(&mut self) {
        self.form.reset();
        self.state.dispatch(StoreEvent::Cleared);
    }
}
