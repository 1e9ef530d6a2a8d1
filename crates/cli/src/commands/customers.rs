//! Customer commands.

use clap::Subcommand;
use pizzeria_admin::AppState;

use crate::error::{CliError, check};
use crate::render;

#[derive(Subcommand)]
pub enum CustomersAction {
    /// List all customers
    List,
    /// Find a customer by phone number
    Phone { phone: String },
}

pub async fn run(state: &AppState, action: CustomersAction) -> Result<(), CliError> {
    let mut customers = state.customers_page();

    let outcome = match action {
        CustomersAction::List => customers.load_all().await,
        CustomersAction::Phone { phone } => {
            customers.form.phone = phone;
            customers.search_by_phone().await
        }
    };

    check(outcome, customers.state())?;
    render::feedback(customers.state().feedback());
    render::customers(customers.state().items());
    Ok(())
}
