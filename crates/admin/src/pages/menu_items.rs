//! Menu management page.

use pizzeria_core::{MenuItem, MenuItemId, Page, Price, PriceUpdate, SearchKey};
use tracing::{info, instrument, warn};

use super::{Confirm, Outcome, invalid_form_message, load_list, mutate_then_reload};
use crate::api::{ApiClient, SortDirection, Transport};
use crate::forms::MenuItemForm;
use crate::store::{StoreEvent, ViewState};

/// Default page size when the list is refreshed after a change.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Controller for the menu page.
#[derive(Debug)]
pub struct MenuItemsPage<T> {
    api: ApiClient<T>,
    page_size: u32,
    state: ViewState<MenuItem, MenuItemId>,
    /// The create/edit form.
    pub form: MenuItemForm,
}

impl<T: Transport> MenuItemsPage<T> {
    #[must_use]
    pub fn new(api: ApiClient<T>) -> Self {
        Self::with_page_size(api, DEFAULT_PAGE_SIZE)
    }

    /// Use `page_size` for the available listing and for the refresh that
    /// follows every change.
    #[must_use]
    pub fn with_page_size(api: ApiClient<T>, page_size: u32) -> Self {
        Self {
            api,
            page_size,
            state: ViewState::new(),
            form: MenuItemForm::default(),
        }
    }

    #[must_use]
    pub const fn state(&self) -> &ViewState<MenuItem, MenuItemId> {
        &self.state
    }

    /// Load one page of the menu.
    #[instrument(skip(self))]
    pub async fn load_all(&mut self, page: u32, elements: u32) -> Outcome {
        let api = &self.api;
        load_list(
            &mut self.state,
            async { api.list_menu_items(page, elements).await.map(Page::into_content) },
            |items| format!("{} menu items loaded.", items.len()),
            "Could not load the menu.",
            false,
        )
        .await
    }

    /// Load the first page of available items, cheapest first.
    #[instrument(skip(self))]
    pub async fn load_available(&mut self) -> Outcome {
        let api = &self.api;
        let page_size = self.page_size;
        load_list(
            &mut self.state,
            async {
                api.available_menu_items(0, page_size, "price", SortDirection::Ascending)
                    .await
                    .map(Page::into_content)
            },
            |items| format!("Showing {} available menu items.", items.len()),
            "Could not load the available menu items.",
            false,
        )
        .await
    }

    /// Show the item with exactly this name, or an empty list.
    #[instrument(skip(self))]
    pub async fn search_by_name(&mut self, raw: &str) -> Outcome {
        let Ok(name) = SearchKey::parse(raw) else {
            return self.reject("Enter a name to search for.");
        };
        let api = &self.api;
        load_list(
            &mut self.state,
            async { api.menu_item_by_name(&name).await.map(Vec::from_iter) },
            |items| {
                if items.is_empty() {
                    format!("No menu item is named \"{name}\".")
                } else {
                    format!("Found \"{name}\".")
                }
            },
            "Could not search menu items by name.",
            true,
        )
        .await
    }

    /// Items whose description mentions `raw`.
    #[instrument(skip(self))]
    pub async fn search_with_ingredient(&mut self, raw: &str) -> Outcome {
        let Ok(ingredient) = SearchKey::parse(raw) else {
            return self.reject("Enter an ingredient to search for.");
        };
        let api = &self.api;
        load_list(
            &mut self.state,
            api.menu_items_with(&ingredient),
            |items| format!("{} menu items with {ingredient}.", items.len()),
            "Could not search menu items by ingredient.",
            true,
        )
        .await
    }

    /// Items whose description does not mention `raw`.
    #[instrument(skip(self))]
    pub async fn search_without_ingredient(&mut self, raw: &str) -> Outcome {
        let Ok(ingredient) = SearchKey::parse(raw) else {
            return self.reject("Enter an ingredient to search for.");
        };
        let api = &self.api;
        load_list(
            &mut self.state,
            api.menu_items_without(&ingredient),
            |items| format!("{} menu items without {ingredient}.", items.len()),
            "Could not search menu items by ingredient.",
            true,
        )
        .await
    }

    /// Items priced at or below `raw`, which must be a non-negative number.
    #[instrument(skip(self))]
    pub async fn search_cheapest(&mut self, raw: &str) -> Outcome {
        let max_price = match Price::parse(raw) {
            Ok(price) => price,
            Err(e) => return self.reject(&format!("Invalid maximum price: {e}.")),
        };
        let api = &self.api;
        load_list(
            &mut self.state,
            api.cheapest_menu_items(max_price),
            |items| format!("{} menu items at or below {max_price}.", items.len()),
            "Could not search menu items by price.",
            true,
        )
        .await
    }

    /// Create or update from the form, depending on the edit mode.
    #[instrument(skip(self))]
    pub async fn submit(&mut self) -> Outcome {
        let editing = self.state.editing_id().copied();
        let item = match self.form.to_dto(editing) {
            Ok(item) => item,
            Err(errors) => {
                self.form.mark_all_touched();
                return self.reject(&invalid_form_message(&errors));
            }
        };

        let api = &self.api;
        let page_size = self.page_size;
        let reload = async { api.list_menu_items(0, page_size).await.map(Page::into_content) };
        let outcome = if editing.is_some() {
            mutate_then_reload(
                &mut self.state,
                api.update_menu_item(&item),
                reload,
                "Menu item updated.",
                "Could not save the menu item.",
            )
            .await
        } else {
            mutate_then_reload(
                &mut self.state,
                api.create_menu_item(&item),
                reload,
                "Menu item created.",
                "Could not save the menu item.",
            )
            .await
        };

        if outcome.is_completed() {
            info!(name = %item.name, "Menu item saved");
            self.form.reset();
            self.state.dispatch(StoreEvent::EditFinished);
        }
        outcome
    }

    /// Load an item into the form for editing.
    pub fn edit(&mut self, item: &MenuItem) {
        let Some(id) = item.id else {
            warn!(name = %item.name, "Cannot edit a menu item without an id");
            return;
        };
        self.edit_with(id, MenuItemForm::from_entity(item));
    }

    /// Enter edit mode for `id` with an already filled form.
    pub fn edit_with(&mut self, id: MenuItemId, form: MenuItemForm) {
        self.form = form;
        self.state.dispatch(StoreEvent::EditStarted(id));
    }

    /// Leave edit mode and clear the form.
    pub fn cancel_edit(&mut self) {
        self.form.reset();
        self.state.dispatch(StoreEvent::EditFinished);
    }

    /// Delete after the user confirms.
    #[instrument(skip(self, confirm))]
    pub async fn delete(&mut self, id: MenuItemId, confirm: &impl Confirm) -> Outcome {
        if !confirm.confirm(&format!("Delete menu item #{id}?")) {
            return Outcome::Cancelled;
        }

        let api = &self.api;
        let page_size = self.page_size;
        mutate_then_reload(
            &mut self.state,
            api.delete_menu_item(id),
            async { api.list_menu_items(0, page_size).await.map(Page::into_content) },
            "Menu item deleted.",
            "Could not delete the menu item.",
        )
        .await
    }

    /// Change only the price of one item.
    #[instrument(skip(self))]
    pub async fn update_price(&mut self, menu_item_id: MenuItemId, raw: &str) -> Outcome {
        let new_price = match Price::parse(raw) {
            Ok(price) => price,
            Err(e) => return self.reject(&format!("Invalid price: {e}.")),
        };

        let api = &self.api;
        let page_size = self.page_size;
        mutate_then_reload(
            &mut self.state,
            api.update_menu_item_price(PriceUpdate {
                menu_item_id,
                new_price,
            }),
            async { api.list_menu_items(0, page_size).await.map(Page::into_content) },
            "Price updated.",
            "Could not update the price.",
        )
        .await
    }

    fn reject(&mut self, message: &str) -> Outcome {
        self.state.dispatch(StoreEvent::Rejected(message.to_string()));
        Outcome::Rejected
    }
}
