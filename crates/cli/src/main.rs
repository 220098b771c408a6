//! Hello Storefront CLI - session migrations and offline rendering.
//!
//! # Usage
//!
//! ```bash
//! # Create the PostgreSQL session table
//! hello-storefront-cli migrate sessions
//!
//! # Render the root document for a cart
//! hello-storefront-cli render --cart-id gid://shopify/Cart/c1-abc123
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "hello-storefront-cli")]
#[command(author, version, about = "Hello Storefront CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate {
        #[command(subcommand)]
        target: MigrateTarget,
    },
    /// Render the root document against the configured Storefront API
    Render {
        /// Cart ID to load, as if stored in the visitor's session
        #[arg(long)]
        cart_id: Option<String>,
    },
}

#[derive(Subcommand)]
enum MigrateTarget {
    /// Create the session store table
    Sessions,
}

#[tokio::main]
async fn main() {
    // Logs go to stderr so `render` output can be piped
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Migrate { target } => match target {
            MigrateTarget::Sessions => commands::migrate::sessions().await?,
        },
        Commands::Render { cart_id } => commands::render::root(cart_id).await?,
    }
    Ok(())
}
