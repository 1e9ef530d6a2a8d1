//! Menu item commands.

use clap::{Args, Subcommand};
use pizzeria_admin::AppState;
use pizzeria_admin::forms::MenuItemForm;
use pizzeria_core::MenuItemId;

use crate::confirm::TerminalConfirm;
use crate::error::{CliError, check};
use crate::render;

#[derive(Subcommand)]
pub enum MenuAction {
    /// List one page of the menu
    List {
        /// Zero-based page number
        #[arg(long, default_value_t = 0)]
        page: u32,

        /// Page size (default: `PIZZERIA_PAGE_SIZE`)
        #[arg(long)]
        elements: Option<u32>,
    },
    /// List available items, cheapest first
    Available,
    /// Find the item with exactly this name
    FindName { name: String },
    /// Items whose description mentions an ingredient
    With { ingredient: String },
    /// Items whose description does not mention an ingredient
    Without { ingredient: String },
    /// Items at or below a price
    Cheapest { max_price: String },
    /// Create a menu item
    Create(MenuItemArgs),
    /// Replace a menu item
    Update {
        id: MenuItemId,

        #[command(flatten)]
        fields: MenuItemArgs,
    },
    /// Change only the price of a menu item
    SetPrice { id: MenuItemId, price: String },
    /// Delete a menu item
    Delete {
        id: MenuItemId,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Args)]
pub struct MenuItemArgs {
    #[arg(short, long)]
    name: String,

    #[arg(short, long, default_value = "")]
    description: String,

    #[arg(short, long)]
    price: String,

    #[arg(long)]
    vegetarian: bool,

    #[arg(long)]
    vegan: bool,

    /// Hide the item from the available list
    #[arg(long)]
    unavailable: bool,
}

impl MenuItemArgs {
    fn into_form(self) -> MenuItemForm {
        MenuItemForm {
            name: self.name,
            description: self.description,
            price: self.price,
            vegetarian: self.vegetarian,
            vegan: self.vegan,
            available: !self.unavailable,
            ..MenuItemForm::default()
        }
    }
}

pub async fn run(state: &AppState, action: MenuAction) -> Result<(), CliError> {
    let mut menu = state.menu_items_page();

    let outcome = match action {
        MenuAction::List { page, elements } => {
            let elements = elements.unwrap_or(state.config().page_size);
            menu.load_all(page, elements).await
        }
        MenuAction::Available => menu.load_available().await,
        MenuAction::FindName { name } => menu.search_by_name(&name).await,
        MenuAction::With { ingredient } => menu.search_with_ingredient(&ingredient).await,
        MenuAction::Without { ingredient } => menu.search_without_ingredient(&ingredient).await,
        MenuAction::Cheapest { max_price } => menu.search_cheapest(&max_price).await,
        MenuAction::Create(fields) => {
            menu.form = fields.into_form();
            menu.submit().await
        }
        MenuAction::Update { id, fields } => {
            menu.edit_with(id, fields.into_form());
            menu.submit().await
        }
        MenuAction::SetPrice { id, price } => menu.update_price(id, &price).await,
        MenuAction::Delete { id, yes } => menu.delete(id, &TerminalConfirm::new(yes)).await,
    };

    check(outcome, menu.state())?;
    render::feedback(menu.state().feedback());
    render::menu_items(menu.state().items());
    Ok(())
}
