//! Pizzeria CLI - manage the menu, orders and customers from a terminal.
//!
//! # Usage
//!
//! ```bash
//! # List the first page of the menu
//! pz-cli menu list
//!
//! # Menu items without mushrooms
//! pz-cli menu without mushrooms
//!
//! # Create a menu item
//! pz-cli menu create -n Diavola -d "Spicy salami" -p 11.50
//!
//! # Today's orders
//! pz-cli orders today
//!
//! # Delete an order without the confirmation prompt
//! pz-cli orders delete 42 --yes
//!
//! # Look up a customer
//! pz-cli customers phone 555-0100
//! ```
//!
//! # Environment Variables
//!
//! - `PIZZERIA_API_URL`, `PIZZERIA_PAGE_SIZE`, `PIZZERIA_SELECTION_PAGE_SIZE`:
//!   see `pizzeria_admin::config`
//! - `RUST_LOG` - log filter (default: `pizzeria_admin=info,pizzeria_cli=info`)
//! - `PIZZERIA_LOG_JSON` - emit JSON logs when set

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use pizzeria_admin::AppState;
use pizzeria_admin::config::AdminConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod confirm;
mod error;
mod render;

use error::CliError;

#[derive(Parser)]
#[command(name = "pz-cli")]
#[command(author, version, about = "Pizzeria admin CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage menu items
    Menu {
        #[command(subcommand)]
        action: commands::menu::MenuAction,
    },
    /// Manage orders
    Orders {
        #[command(subcommand)]
        action: commands::orders::OrdersAction,
    },
    /// Browse customers
    Customers {
        #[command(subcommand)]
        action: commands::customers::CustomersAction,
    },
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "pizzeria_admin=info,pizzeria_cli=info".into());

    let is_json = std::env::var_os("PIZZERIA_LOG_JSON").is_some();
    let json_layer = is_json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(std::io::stderr)
    });
    let text_layer =
        (!is_json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config = AdminConfig::from_env().map_err(pizzeria_admin::AdminError::from)?;
    tracing::debug!(api_url = %config.api_url, "Configuration loaded");
    let state = AppState::from_config(config)?;

    match cli.command {
        Commands::Menu { action } => commands::menu::run(&state, action).await,
        Commands::Orders { action } => commands::orders::run(&state, action).await,
        Commands::Customers { action } => commands::customers::run(&state, action).await,
    }
}
