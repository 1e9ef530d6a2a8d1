//! Menu item DTOs.

use serde::{Deserialize, Serialize};

use crate::types::{MenuItemId, Price};

/// A pizza on the menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    /// Backend key; `None` until the item has been persisted.
    #[serde(rename = "idPizza")]
    pub id: Option<MenuItemId>,
    /// Display name (also the key of the by-name lookup).
    pub name: String,
    /// Free-text description, usually the ingredient list.
    #[serde(default)]
    pub description: String,
    /// Unit price.
    pub price: Price,
    /// Contains no meat or fish.
    #[serde(default)]
    pub vegetarian: bool,
    /// Contains no animal products.
    #[serde(default)]
    pub vegan: bool,
    /// Currently offered.
    #[serde(default)]
    pub available: bool,
}

/// Body of the partial price update (`PUT /pizzas/price`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceUpdate {
    /// Item whose price changes.
    #[serde(rename = "pizzaId")]
    pub menu_item_id: MenuItemId,
    /// Replacement price.
    pub new_price: Price,
}
