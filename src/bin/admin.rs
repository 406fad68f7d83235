//! CLI administration tool for alias-shortener.
//!
//! Works directly against PostgreSQL through the same services the HTTP
//! server uses, so aliases created here obey the same rules.
//!
//! # Usage
//!
//! ```bash
//! # Store a URL under a generated alias
//! cargo run --bin admin -- alias create https://example.com
//!
//! # Store a URL under a chosen alias
//! cargo run --bin admin -- alias create https://example.com --alias myalias12345678901ab
//!
//! # Look up an alias
//! cargo run --bin admin -- alias resolve myalias12345678901ab
//!
//! # Remove an alias
//! cargo run --bin admin -- alias delete myalias12345678901ab
//!
//! # Check database connection / apply migrations
//! cargo run --bin admin -- db check
//! cargo run --bin admin -- db migrate
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (or `DB_*` components): PostgreSQL connection
//! - `ALIAS_LENGTH`: alias length (default 20)

use alias_shortener::application::services::{ResolutionService, ShorteningService};
use alias_shortener::config::{Config, StorageBackend};
use alias_shortener::domain::repositories::UrlRepository;
use alias_shortener::infrastructure::persistence::PgUrlRepository;
use alias_shortener::server::connect_pool;
use alias_shortener::utils::alias_generator::AliasGenerator;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing alias-shortener.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage aliases
    Alias {
        #[command(subcommand)]
        action: AliasAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Alias management subcommands.
#[derive(Subcommand)]
enum AliasAction {
    /// Store a URL under an alias
    Create {
        /// Destination URL
        url: String,

        /// Alias to use (generated if omitted)
        #[arg(short, long)]
        alias: Option<String>,
    },

    /// Print the URL stored under an alias
    Resolve {
        alias: String,
    },

    /// Permanently remove an alias
    Delete {
        alias: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Apply pending migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = Config::from_env()?;
    if config.storage != StorageBackend::Postgres {
        anyhow::bail!("admin only works with STORAGE=postgres");
    }
    config.validate()?;

    let pool = connect_pool(&config).await?;

    match cli.command {
        Commands::Alias { action } => handle_alias_action(action, &pool, &config).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches alias management commands.
async fn handle_alias_action(action: AliasAction, pool: &PgPool, config: &Config) -> Result<()> {
    let repository: Arc<dyn UrlRepository> =
        Arc::new(PgUrlRepository::new(Arc::new(pool.clone())));

    match action {
        AliasAction::Create { url, alias } => {
            let service = ShorteningService::new(
                repository,
                AliasGenerator::from_entropy(),
                config.alias_length,
            );
            create_alias(&service, url, alias).await?;
        }
        AliasAction::Resolve { alias } => {
            let service = ResolutionService::new(repository);
            let url = service.resolve(&alias).await?;
            println!("{} -> {}", alias.cyan(), url.bright_white());
        }
        AliasAction::Delete { alias, yes } => {
            let service = ShorteningService::new(
                repository,
                AliasGenerator::from_entropy(),
                config.alias_length,
            );
            delete_alias(&service, alias, yes).await?;
        }
    }

    Ok(())
}

/// Validates the URL and stores it.
async fn create_alias(
    service: &ShorteningService<dyn UrlRepository>,
    url: String,
    alias: Option<String>,
) -> Result<()> {
    url::Url::parse(&url).with_context(|| format!("'{url}' is not a valid URL"))?;

    let alias = service.shorten(url.clone(), alias).await?;

    println!("{}", "Alias created".green().bold());
    println!("  Alias: {}", alias.bright_yellow().bold());
    println!("  URL:   {}", url.cyan());

    Ok(())
}

/// Removes an alias after confirmation.
async fn delete_alias(
    service: &ShorteningService<dyn UrlRepository>,
    alias: String,
    yes: bool,
) -> Result<()> {
    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete alias '{alias}' permanently?"))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    service.delete(&alias).await?;
    println!("{}", "Alias deleted".green().bold());

    Ok(())
}

/// Dispatches database commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Migrate => {
            sqlx::migrate!("./migrations")
                .run(pool)
                .await
                .context("Failed to run migrations")?;

            println!("{}", "Migrations applied".green().bold());
        }
    }

    Ok(())
}
