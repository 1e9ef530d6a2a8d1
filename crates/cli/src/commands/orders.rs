//! Order commands.

use clap::{Args, Subcommand};
use pizzeria_admin::AppState;
use pizzeria_admin::api::Transport;
use pizzeria_admin::forms::OrderForm;
use pizzeria_admin::pages::{Outcome, OrdersPage};
use pizzeria_core::{MenuItem, MenuItemId, OrderId};

use crate::confirm::TerminalConfirm;
use crate::error::{CliError, check};
use crate::render;

#[derive(Subcommand)]
pub enum OrdersAction {
    /// List all orders
    List,
    /// Orders placed today
    Today,
    /// Delivery and carry-out orders
    Outside,
    /// Create a single-line order
    Create(OrderArgs),
    /// Replace an order
    Update {
        id: OrderId,

        #[command(flatten)]
        fields: OrderArgs,
    },
    /// Delete an order
    Delete {
        id: OrderId,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Args)]
pub struct OrderArgs {
    /// Customer id
    #[arg(short, long)]
    customer: String,

    /// Payment or delivery method code
    #[arg(short, long)]
    method: String,

    /// Menu item id for the order line
    #[arg(long)]
    menu_item: String,

    #[arg(short, long, default_value = "1")]
    quantity: String,

    /// Unit price (default: the menu item's current price; required when the
    /// item is not in the first selection page)
    #[arg(long)]
    unit_price: Option<String>,

    /// Order date; left to the backend when empty
    #[arg(long, default_value = "")]
    date: String,

    #[arg(long, default_value = "")]
    notes: String,
}

pub async fn run(state: &AppState, action: OrdersAction) -> Result<(), CliError> {
    let mut orders = state.orders_page();

    let outcome = match action {
        OrdersAction::List => {
            load_phones(&mut orders).await;
            orders.load_all().await
        }
        OrdersAction::Today => {
            load_phones(&mut orders).await;
            orders.load_today().await
        }
        OrdersAction::Outside => {
            load_phones(&mut orders).await;
            orders.load_outside().await
        }
        OrdersAction::Create(fields) => {
            fill_form(&mut orders, fields).await?;
            orders.submit().await
        }
        OrdersAction::Update { id, fields } => {
            orders.edit_with(id, OrderForm::default());
            fill_form(&mut orders, fields).await?;
            orders.submit().await
        }
        OrdersAction::Delete { id, yes } => orders.delete(id, &TerminalConfirm::new(yes)).await,
    };

    check(outcome, orders.state())?;
    render::feedback(orders.state().feedback());
    render::orders(orders.state().items(), |id| orders.phone_for(id));
    Ok(())
}

/// Phone numbers are decoration; listing goes ahead without them.
async fn load_phones<T: Transport>(orders: &mut OrdersPage<T>) {
    if orders.load_customers().await != Outcome::Completed {
        tracing::warn!("Listing orders without customer phone numbers");
    }
}

async fn fill_form<T: Transport>(
    orders: &mut OrdersPage<T>,
    fields: OrderArgs,
) -> Result<(), CliError> {
    let outcome = orders.load_menu_items().await;
    check(outcome, orders.state())?;

    orders.form.customer_id = fields.customer;
    orders.form.method = fields.method;
    orders.form.date = fields.date;
    orders.form.notes = fields.notes;
    orders.form.set_quantity(&fields.quantity);
    orders.select_menu_item(&fields.menu_item);
    match fields.unit_price {
        Some(unit_price) => orders.form.set_unit_price(&unit_price),
        None if !lists_menu_item(orders.menu_items(), &fields.menu_item) => {
            return Err(CliError::Action(format!(
                "Menu item #{} is not among the loaded menu items; pass --unit-price",
                fields.menu_item.trim()
            )));
        }
        None => {}
    }
    Ok(())
}

/// Whether the unit price can be taken from the loaded menu.
fn lists_menu_item(menu: &[MenuItem], raw_id: &str) -> bool {
    raw_id
        .trim()
        .parse::<MenuItemId>()
        .is_ok_and(|id| menu.iter().any(|item| item.id == Some(id)))
}
