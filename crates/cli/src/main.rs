//! Khanjar CLI - Database migrations and catalog tools.
//!
//! # Usage
//!
//! ```bash
//! # Run storefront database migrations
//! khanjar-cli migrate
//!
//! # Validate the product manifest
//! khanjar-cli catalog validate
//!
//! # Validate a manifest in another directory
//! khanjar-cli catalog validate --content-dir path/to/content
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "khanjar-cli")]
#[command(author, version, about = "Khanjar CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run storefront database migrations
    Migrate,
    /// Catalog manifest tools
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// Validate the product manifest and report category counts
    Validate {
        /// Directory holding products.json
        #[arg(long, default_value = "crates/storefront/content")]
        content_dir: String,
    },
}

#[tokio::main]
async fn main() {
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
    match cli.command {
        Commands::Migrate => commands::migrate::storefront().await?,
        Commands::Catalog { action } => match action {
            CatalogAction::Validate { content_dir } => {
                commands::catalog::validate(&content_dir)?;
            }
        },
    }
    Ok(())
}
