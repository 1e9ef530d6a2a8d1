//! Order management page.

use std::collections::HashMap;

use pizzeria_core::{Customer, CustomerId, MenuItem, Order, OrderId, Page};
use tracing::{info, instrument, warn};

use super::{Confirm, Outcome, invalid_form_message, load_list, mutate_then_reload};
use crate::api::{ApiClient, Transport};
use crate::forms::OrderForm;
use crate::store::{StoreEvent, ViewState};

/// How many menu items are offered when building an order.
pub const DEFAULT_SELECTION_PAGE_SIZE: u32 = 50;

/// Controller for the orders page.
///
/// Besides the orders themselves, the page keeps the menu items an order
/// line can pick from and a phone number per customer for display.
#[derive(Debug)]
pub struct OrdersPage<T> {
    api: ApiClient<T>,
    selection_page_size: u32,
    state: ViewState<Order, OrderId>,
    menu_items: Vec<MenuItem>,
    customers: Vec<Customer>,
    customer_phones: HashMap<CustomerId, String>,
    pub form: OrderForm,
}

impl<T: Transport> OrdersPage<T> {
    #[must_use]
    pub fn new(api: ApiClient<T>) -> Self {
        Self::with_selection_page_size(api, DEFAULT_SELECTION_PAGE_SIZE)
    }

    #[must_use]
    pub fn with_selection_page_size(api: ApiClient<T>, selection_page_size: u32) -> Self {
        Self {
            api,
            selection_page_size,
            state: ViewState::new(),
            menu_items: Vec::new(),
            customers: Vec::new(),
            customer_phones: HashMap::new(),
            form: OrderForm::default(),
        }
    }

    #[must_use]
    pub const fn state(&self) -> &ViewState<Order, OrderId> {
        &self.state
    }

    /// Menu items available to the order form.
    #[must_use]
    pub fn menu_items(&self) -> &[MenuItem] {
        &self.menu_items
    }

    #[must_use]
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// The phone number on file for a customer, if any.
    #[must_use]
    pub fn phone_for(&self, customer_id: &CustomerId) -> Option<&str> {
        self.customer_phones.get(customer_id).map(String::as_str)
    }

    #[instrument(skip(self))]
    pub async fn load_all(&mut self) -> Outcome {
        let api = &self.api;
        load_list(
            &mut self.state,
            api.list_orders(),
            |orders| format!("{} orders loaded.", orders.len()),
            "Could not load orders.",
            false,
        )
        .await
    }

    #[instrument(skip(self))]
    pub async fn load_today(&mut self) -> Outcome {
        let api = &self.api;
        load_list(
            &mut self.state,
            api.todays_orders(),
            |orders| format!("Showing {} orders from today.", orders.len()),
            "Could not load today's orders.",
            false,
        )
        .await
    }

    #[instrument(skip(self))]
    pub async fn load_outside(&mut self) -> Outcome {
        let api = &self.api;
        load_list(
            &mut self.state,
            api.outside_orders(),
            |orders| format!("Showing {} delivery and carry-out orders.", orders.len()),
            "Could not load delivery and carry-out orders.",
            false,
        )
        .await
    }

    /// Load the menu items an order line can pick from.
    #[instrument(skip(self))]
    pub async fn load_menu_items(&mut self) -> Outcome {
        self.state.dispatch(StoreEvent::LoadStarted);
        match self
            .api
            .list_menu_items(0, self.selection_page_size)
            .await
            .map(Page::into_content)
        {
            Ok(items) => {
                let message = format!("{} menu items available for orders.", items.len());
                self.menu_items = items;
                self.state.dispatch(StoreEvent::Succeeded(message));
                Outcome::Completed
            }
            Err(e) => {
                warn!(error = %e, "Failed to load menu items for orders");
                self.fail("Could not load menu items for the order form.")
            }
        }
    }

    /// Load customers and index their phone numbers.
    ///
    /// Customers without a phone number are left out of the index.
    #[instrument(skip(self))]
    pub async fn load_customers(&mut self) -> Outcome {
        self.state.dispatch(StoreEvent::LoadStarted);
        match self.api.list_customers().await {
            Ok(customers) => {
                self.customer_phones = customers
                    .iter()
                    .filter(|c| !c.id.is_empty())
                    .filter_map(|c| c.phone().map(|phone| (c.id.clone(), phone.to_string())))
                    .collect();
                let message = format!("{} customers loaded.", customers.len());
                self.customers = customers;
                self.state.dispatch(StoreEvent::Succeeded(message));
                Outcome::Completed
            }
            Err(e) => {
                warn!(error = %e, "Failed to load customers for orders");
                self.fail("Could not load customers.")
            }
        }
    }

    /// Pick the line's menu item by its raw id.
    pub fn select_menu_item(&mut self, raw_id: &str) {
        self.form.select_menu_item(raw_id, &self.menu_items);
    }

    /// Create or update from the form, depending on the edit mode.
    #[instrument(skip(self))]
    pub async fn submit(&mut self) -> Outcome {
        let payload = match self.form.to_payload() {
            Ok(payload) => payload,
            Err(errors) => {
                self.form.mark_all_touched();
                self.state
                    .dispatch(StoreEvent::Rejected(invalid_form_message(&errors)));
                return Outcome::Rejected;
            }
        };

        let editing = self.state.editing_id().copied();
        let api = &self.api;
        let outcome = if let Some(id) = editing {
            mutate_then_reload(
                &mut self.state,
                api.update_order(id, &payload),
                api.list_orders(),
                "Order updated.",
                "Could not save the order.",
            )
            .await
        } else {
            mutate_then_reload(
                &mut self.state,
                api.create_order(&payload),
                api.list_orders(),
                "Order created.",
                "Could not save the order.",
            )
            .await
        };

        if outcome.is_completed() {
            info!(customer = %payload.customer_id, "Order saved");
            self.form.reset();
            self.state.dispatch(StoreEvent::EditFinished);
        }
        outcome
    }

    /// Load an order's first line into the form for editing.
    pub fn edit(&mut self, order: &Order) {
        self.edit_with(order.id, OrderForm::from_entity(order));
    }

    /// Enter edit mode for `id` with an already filled form.
    pub fn edit_with(&mut self, id: OrderId, form: OrderForm) {
        self.form = form;
        self.state.dispatch(StoreEvent::EditStarted(id));
    }

    /// Delete after the user confirms.
    #[instrument(skip(self, confirm))]
    pub async fn delete(&mut self, id: OrderId, confirm: &impl Confirm) -> Outcome {
        if !confirm.confirm(&format!("Delete order #{id}?")) {
            return Outcome::Cancelled;
        }

        let api = &self.api;
        mutate_then_reload(
            &mut self.state,
            api.delete_order(id),
            api.list_orders(),
            "Order deleted.",
            "Could not delete the order.",
        )
        .await
    }

    /// Reset the form, leave edit mode and drop the feedback.
    pub fn clear_form(&mut self) {
        self.form.reset();
        self.state.dispatch(StoreEvent::EditFinished);
        self.state.dispatch(StoreEvent::FeedbackDismissed);
    }

    fn fail(&mut self, message: &str) -> Outcome {
        self.state.dispatch(StoreEvent::Failed {
            message: message.to_string(),
            clear_items: false,
        });
        Outcome::Failed
    }
}
