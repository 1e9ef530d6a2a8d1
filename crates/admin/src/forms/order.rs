use pizzeria_core::{CustomerId, MenuItem, MenuItemId, Order, OrderLine, OrderPayload, Price};

use super::{
    FieldError, Touched, ValidationErrors, parse_count, required_count, required_price,
    required_text,
};

/// Create/edit form for a single-line order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderForm {
    pub customer_id: String,
    /// Optional; the backend fills it in when empty.
    pub date: String,
    pub method: String,
    pub notes: String,
    pub menu_item_id: String,
    pub quantity: String,
    pub unit_price: String,
    pub total: String,
    pub touched: Touched,
}

impl Default for OrderForm {
    fn default() -> Self {
        Self {
            customer_id: String::new(),
            date: String::new(),
            method: String::new(),
            notes: String::new(),
            menu_item_id: String::new(),
            quantity: "1".to_string(),
            unit_price: "0".to_string(),
            total: "0".to_string(),
            touched: Touched::default(),
        }
    }
}

impl OrderForm {
    pub const FIELDS: &[&'static str] = &[
        "customer_id",
        "date",
        "method",
        "notes",
        "menu_item_id",
        "quantity",
        "unit_price",
        "total",
    ];

    /// Populate the form from an order's first line.
    #[must_use]
    pub fn from_entity(order: &Order) -> Self {
        let line = order.first_line();
        Self {
            customer_id: order.customer_id.to_string(),
            date: order.date.clone(),
            method: order.payment_method.clone(),
            notes: order.additional_notes.clone().unwrap_or_default(),
            menu_item_id: line
                .map(|l| l.menu_item_id.to_string())
                .unwrap_or_default(),
            quantity: line.map_or(1, |l| l.quantity).to_string(),
            unit_price: line.map_or(Price::ZERO, OrderLine::effective_price).to_string(),
            total: order.total.to_string(),
            touched: Touched::default(),
        }
    }

    /// Pick a menu item for the line.
    ///
    /// When the item is among `menu`, its price becomes the unit price. The
    /// total is recomputed either way.
    pub fn select_menu_item(&mut self, raw_id: &str, menu: &[MenuItem]) {
        self.menu_item_id = raw_id.trim().to_string();
        self.touched.touch("menu_item_id");

        let selected = raw_id.trim().parse::<MenuItemId>().ok().and_then(|id| {
            menu.iter().find(|item| item.id == Some(id))
        });
        if let Some(item) = selected {
            self.unit_price = item.price.to_string();
        }
        self.recompute_total();
    }

    pub fn set_quantity(&mut self, raw: &str) {
        self.quantity = raw.to_string();
        self.touched.touch("quantity");
        self.recompute_total();
    }

    pub fn set_unit_price(&mut self, raw: &str) {
        self.unit_price = raw.to_string();
        self.touched.touch("unit_price");
        self.recompute_total();
    }

    /// `total = quantity × unit_price`; blank when either is unusable.
    pub fn recompute_total(&mut self) {
        let quantity = parse_count(&self.quantity);
        let price = Price::parse(&self.unit_price).ok();
        self.total = quantity
            .zip(price)
            .and_then(|(quantity, price)| price.times(quantity))
            .map(|total| total.to_string())
            .unwrap_or_default();
    }

    /// Validate and build the request body.
    ///
    /// # Errors
    ///
    /// Returns every invalid field: blank customer, method or menu item,
    /// a quantity below one, or a negative or non-numeric price or total.
    pub fn to_payload(&self) -> Result<OrderPayload, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let customer_id = required_text(&mut errors, "customer_id", &self.customer_id);
        let method = required_text(&mut errors, "method", &self.method);
        let menu_item_id = self.parse_menu_item_id(&mut errors);
        let quantity = required_count(&mut errors, "quantity", &self.quantity, 1);
        let unit_price = required_price(&mut errors, "unit_price", &self.unit_price);
        let total = required_price(&mut errors, "total", &self.total);

        match (customer_id, method, menu_item_id, quantity, unit_price, total) {
            (
                Some(customer_id),
                Some(payment_method),
                Some(menu_item_id),
                Some(quantity),
                Some(price),
                Some(total),
            ) if errors.is_empty() => Ok(OrderPayload {
                customer_id: CustomerId::new(customer_id),
                date: self.date.trim().to_string(),
                payment_method,
                total,
                additional_notes: self.notes.trim().to_string(),
                items: vec![OrderLine {
                    order_id: None,
                    line_id: None,
                    menu_item_id,
                    quantity,
                    price: Some(price),
                    menu_item: None,
                }],
            }),
            _ => Err(errors),
        }
    }

    fn parse_menu_item_id(&self, errors: &mut ValidationErrors) -> Option<MenuItemId> {
        let raw = self.menu_item_id.trim();
        if raw.is_empty() {
            errors.add("menu_item_id", FieldError::Required);
            return None;
        }
        raw.parse()
            .map_err(|_| errors.add("menu_item_id", FieldError::NotANumber))
            .ok()
    }

    pub fn mark_all_touched(&mut self) {
        self.touched.mark_all(Self::FIELDS);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
