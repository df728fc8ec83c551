//! Kasira CLI - terminal front end for the Kasira state layer.
//!
//! # Usage
//!
//! ```bash
//! # Log in and persist the session
//! kasira login -u ayu -p secret
//!
//! # Catalog management
//! kasira product list
//! kasira product add -n "Kopi Susu" -c Drinks -p 15000 -s 24
//! kasira product import stock.json
//!
//! # Reports (PDF, written to KASIRA_DOWNLOAD_DIR)
//! kasira export products
//! kasira export daily-sales
//! ```
//!
//! # Environment Variables
//!
//! - `KASIRA_API_URL` - Base URL of the backend API (required)
//! - `KASIRA_SESSION_FILE` - Durable session path
//! - `KASIRA_DOWNLOAD_DIR` - Directory exported reports are written to

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

use kasira_client::AppState;
use kasira_client::config::ClientConfig;
use kasira_core::ProductDraft;

mod commands;

use commands::TerminalShell;

#[derive(Parser)]
#[command(name = "kasira")]
#[command(author, version, about = "Kasira point-of-sale client")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and persist the session
    Login {
        /// Login name
        #[arg(short, long)]
        username: String,

        /// Password
        #[arg(short, long)]
        password: String,
    },
    /// Create an account (does not log in)
    Register {
        /// Login name
        #[arg(short, long)]
        username: String,

        /// Contact email
        #[arg(short, long)]
        email: String,

        /// Password
        #[arg(short, long)]
        password: String,
    },
    /// Clear the persisted session
    Logout,
    /// Inspect and edit the product catalog
    Product {
        #[command(subcommand)]
        action: ProductAction,
    },
    /// Inspect and edit categories
    Category {
        #[command(subcommand)]
        action: CategoryAction,
    },
    /// Show or update store settings
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
    /// Dashboard figures
    Analytics {
        #[command(subcommand)]
        action: AnalyticsAction,
    },
    /// Export PDF reports into the download directory
    Export {
        #[command(subcommand)]
        target: ExportTarget,
    },
}

#[derive(Subcommand)]
enum ProductAction {
    /// List the catalog
    List,
    /// Create a product
    Add {
        /// Display name
        #[arg(short, long)]
        name: String,

        /// Category name
        #[arg(short, long)]
        category: Option<String>,

        /// Unit price
        #[arg(short, long)]
        price: Decimal,

        /// Units on hand
        #[arg(short, long, default_value_t = 0)]
        stock: i32,
    },
    /// Replace a product by ID
    Set {
        /// Product ID
        id: i32,

        /// Display name
        #[arg(short, long)]
        name: String,

        /// Category name
        #[arg(short, long)]
        category: Option<String>,

        /// Unit price
        #[arg(short, long)]
        price: Decimal,

        /// Units on hand
        #[arg(short, long)]
        stock: i32,
    },
    /// Delete a product by ID
    Rm {
        /// Product ID
        id: i32,
    },
    /// Bulk-create products from a JSON file (an array of drafts)
    Import {
        /// Path of the JSON file
        file: PathBuf,
    },
}

#[derive(Subcommand)]
enum CategoryAction {
    /// List categories
    List,
    /// Create a category
    Add {
        /// Category name
        name: String,
    },
}

#[derive(Subcommand)]
enum SettingsAction {
    /// Show the deployment settings
    Show,
    /// Update the deployment settings (unset fields keep their value)
    Set {
        /// Store display name
        #[arg(long)]
        store_name: Option<String>,

        /// Store address
        #[arg(long)]
        store_address: Option<String>,

        /// Low-stock threshold
        #[arg(long)]
        low_stock_threshold: Option<i32>,

        /// Person in charge
        #[arg(long)]
        pic_name: Option<String>,
    },
}

#[derive(Subcommand)]
enum AnalyticsAction {
    /// Aggregate figures
    Summary,
    /// Per-day sales series
    Daily,
}

#[derive(Subcommand)]
enum ExportTarget {
    /// Inventory report over the product catalog
    Products,
    /// Daily sales report
    DailySales,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = ClientConfig::from_env()?;
    let state = AppState::new(&config, Arc::new(TerminalShell));

    match cli.command {
        Commands::Login { username, password } => {
            commands::auth::login(&state, &username, &password).await?;
        }
        Commands::Register {
            username,
            email,
            password,
        } => {
            commands::auth::register(&state, &username, &email, &password).await?;
        }
        Commands::Logout => commands::auth::logout(&state),
        Commands::Product { action } => match action {
            ProductAction::List => commands::product::list(&state).await?,
            ProductAction::Add {
                name,
                category,
                price,
                stock,
            } => {
                let draft = ProductDraft {
                    name,
                    category,
                    price,
                    stock,
                };
                commands::product::add(&state, &draft).await?;
            }
            ProductAction::Set {
                id,
                name,
                category,
                price,
                stock,
            } => {
                let draft = ProductDraft {
                    name,
                    category,
                    price,
                    stock,
                };
                commands::product::set(&state, id, &draft).await?;
            }
            ProductAction::Rm { id } => commands::product::rm(&state, id).await?,
            ProductAction::Import { file } => commands::product::import(&state, &file).await?,
        },
        Commands::Category { action } => match action {
            CategoryAction::List => commands::product::categories(&state).await?,
            CategoryAction::Add { name } => commands::product::add_category(&state, &name).await?,
        },
        Commands::Settings { action } => match action {
            SettingsAction::Show => commands::settings::show(&state).await?,
            SettingsAction::Set {
                store_name,
                store_address,
                low_stock_threshold,
                pic_name,
            } => {
                commands::settings::set(
                    &state,
                    store_name,
                    store_address,
                    low_stock_threshold,
                    pic_name,
                )
                .await?;
            }
        },
        Commands::Analytics { action } => match action {
            AnalyticsAction::Summary => commands::analytics::summary(&state).await?,
            AnalyticsAction::Daily => commands::analytics::daily(&state).await?,
        },
        Commands::Export { target } => match target {
            ExportTarget::Products => commands::export::products(&state).await?,
            ExportTarget::DailySales => commands::export::daily_sales(&state).await?,
        },
    }

    Ok(())
}
