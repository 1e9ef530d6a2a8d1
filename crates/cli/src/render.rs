//! Plain-text output.

#![allow(clippy::print_stdout)]

use pizzeria_core::{Customer, CustomerId, MenuItem, Order};

pub fn feedback(message: Option<&str>) {
    if let Some(message) = message {
        println!("{message}");
    }
}

pub fn menu_items(items: &[MenuItem]) {
    for item in items {
        println!("{}", menu_item_line(item));
    }
}

pub fn orders<'a>(orders: &[Order], phone_for: impl Fn(&CustomerId) -> Option<&'a str>) {
    for order in orders {
        println!("{}", order_line(order, phone_for(&order.customer_id)));
    }
}

pub fn customers(customers: &[Customer]) {
    for customer in customers {
        println!("{}", customer_line(customer));
    }
}

fn menu_item_line(item: &MenuItem) -> String {
    let id = item.id.map(|id| id.to_string()).unwrap_or_default();
    let mut tags = Vec::new();
    if item.vegetarian {
        tags.push("vegetarian");
    }
    if item.vegan {
        tags.push("vegan");
    }
    if !item.available {
        tags.push("unavailable");
    }
    let tags = if tags.is_empty() {
        String::new()
    } else {
        format!(" [{}]", tags.join(", "))
    };
    format!(
        "#{id:<5} {:<24} {:>8}{tags}  {}",
        item.name,
        item.price.to_string(),
        item.description
    )
}

fn order_line(order: &Order, phone: Option<&str>) -> String {
    let lines = order
        .items
        .iter()
        .map(|line| format!("{}x #{}", line.quantity, line.menu_item_id))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "#{:<5} {:<20} {:<12} {:<3} {:>8}  {lines}",
        order.id.to_string(),
        order.customer_id.as_str(),
        phone.unwrap_or("-"),
        order.payment_method,
        order.total.to_string()
    )
}

fn customer_line(customer: &Customer) -> String {
    format!(
        "{:<10} {:<24} {:<14} {}",
        customer.id.as_str(),
        customer.name,
        customer.phone().unwrap_or("-"),
        customer.email
    )
}
