//! Order DTOs.

use serde::{Deserialize, Serialize};

use super::MenuItem;
use crate::types::{CustomerId, MenuItemId, OrderId, OrderLineId, Price};

/// A placed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Backend key.
    #[serde(rename = "idOrder")]
    pub id: OrderId,
    /// Customer who placed the order.
    #[serde(rename = "idCustomer")]
    pub customer_id: CustomerId,
    /// Order timestamp, formatted by the backend.
    #[serde(default)]
    pub date: String,
    /// Order total.
    pub total: Price,
    /// Payment or delivery method code.
    #[serde(rename = "method")]
    pub payment_method: String,
    /// Free-text notes.
    #[serde(default)]
    pub additional_notes: Option<String>,
    /// Order lines; some endpoints omit them.
    #[serde(default)]
    pub items: Vec<OrderLine>,
}

impl Order {
    /// The first order line, which is the one the order form edits.
    #[must_use]
    pub fn first_line(&self) -> Option<&OrderLine> {
        self.items.first()
    }
}

/// One line of an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    /// Owning order, once persisted.
    #[serde(rename = "idOrder", default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<OrderId>,
    /// Line key, once persisted.
    #[serde(rename = "idItem", default, skip_serializing_if = "Option::is_none")]
    pub line_id: Option<OrderLineId>,
    /// Ordered menu item.
    #[serde(rename = "idPizza")]
    pub menu_item_id: MenuItemId,
    /// Number of units.
    pub quantity: u32,
    /// Unit price at the time of ordering; older lines may carry none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Price>,
    /// Embedded menu item, when the backend expands it.
    #[serde(rename = "pizza", default, skip_serializing_if = "Option::is_none")]
    pub menu_item: Option<MenuItem>,
}

impl OrderLine {
    /// Unit price, falling back to the embedded item's price when the line
    /// carries none.
    #[must_use]
    pub fn effective_price(&self) -> Price {
        self.price
            .or_else(|| self.menu_item.as_ref().map(|item| item.price))
            .unwrap_or(Price::ZERO)
    }

    /// `quantity × price`, or `None` on overflow.
    #[must_use]
    pub fn subtotal(&self) -> Option<Price> {
        self.effective_price().times(self.quantity)
    }
}

/// Create/update body for orders: an [`Order`] without its key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPayload {
    /// Customer placing the order.
    #[serde(rename = "idCustomer")]
    pub customer_id: CustomerId,
    /// Order timestamp; empty lets the backend choose.
    pub date: String,
    /// Payment or delivery method code.
    #[serde(rename = "method")]
    pub payment_method: String,
    /// Order total.
    pub total: Price,
    /// Free-text notes; empty when none.
    pub additional_notes: String,
    /// Order lines.
    pub items: Vec<OrderLine>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_order_without_items() {
        let json = r#"{
            "idOrder": 12,
            "idCustomer": "C-9",
            "date": "2024-05-01T19:30:00",
            "total": 21,
            "method": "D",
            "additionalNotes": null
        }"#;

        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.id, OrderId::new(12));
        assert_eq!(order.payment_method, "D");
        assert!(order.items.is_empty());
        assert!(order.first_line().is_none());
    }

    #[test]
    fn test_line_price_falls_back_to_embedded_item() {
        let json = r#"{
            "idPizza": 4,
            "quantity": 2,
            "price": null,
            "pizza": {"idPizza": 4, "name": "Funghi", "price": 10.5}
        }"#;

        let line: OrderLine = serde_json::from_str(json).unwrap();
        assert!(line.price.is_none());
        assert_eq!(line.effective_price(), Price::parse("10.5").unwrap());
        assert_eq!(line.subtotal().unwrap(), Price::from(21));
    }

    #[test]
    fn test_zero_line_price_is_kept() {
        let json = r#"{
            "idPizza": 4,
            "quantity": 1,
            "price": 0,
            "pizza": {"idPizza": 4, "name": "Funghi", "price": 10.5}
        }"#;

        let line: OrderLine = serde_json::from_str(json).unwrap();
        assert_eq!(line.effective_price(), Price::ZERO);
    }

    #[test]
    fn test_line_without_any_price_is_free() {
        let json = r#"{"idPizza": 4, "quantity": 3}"#;

        let line: OrderLine = serde_json::from_str(json).unwrap();
        assert_eq!(line.effective_price(), Price::ZERO);
        assert_eq!(line.subtotal().unwrap(), Price::ZERO);
    }

    #[test]
    fn test_order_with_null_line_price_decodes() {
        let json = r#"{
            "idOrder": 3,
            "idCustomer": "C-2",
            "total": 8,
            "method": "C",
            "items": [{"idPizza": 1, "quantity": 1, "price": null}]
        }"#;

        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.items.len(), 1);
    }

    #[test]
    fn test_payload_omits_unset_line_keys() {
        let payload = OrderPayload {
            customer_id: CustomerId::new("C-1"),
            date: String::new(),
            payment_method: "C".to_string(),
            total: Price::from(20),
            additional_notes: String::new(),
            items: vec![OrderLine {
                order_id: None,
                line_id: None,
                menu_item_id: MenuItemId::new(1),
                quantity: 2,
                price: Some(Price::from(10)),
                menu_item: None,
            }],
        };

        let value = serde_json::to_value(&payload).unwrap();
        assert!(value.get("idOrder").is_none());
        assert_eq!(value["idCustomer"], "C-1");
        assert_eq!(value["method"], "C");
        let line = &value["items"][0];
        assert_eq!(line["idPizza"], 1);
        assert!(line.get("idItem").is_none());
        assert!(line.get("pizza").is_none());
    }
}
