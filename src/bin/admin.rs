//! CLI administration tool for bootcamp-service.
//!
//! Lists and deletes bootcamps and checks the database without going through
//! the HTTP API. Commands run the same services as the server.
//!
//! # Usage
//!
//! ```bash
//! # List the first page of bootcamps
//! cargo run --bin admin -- bootcamp list
//!
//! # Largest bootcamps first
//! cargo run --bin admin -- bootcamp list --sort-by capabilities --order desc
//!
//! # Delete a bootcamp
//! cargo run --bin admin -- bootcamp delete 5f0c7a0e-...
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server, see `bootcamp_service::config`.

use bootcamp_service::config;
use bootcamp_service::domain::entities::{PageRequest, SortDirection, SortField};
use bootcamp_service::server;
use bootcamp_service::state::AppState;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;

/// CLI tool for managing bootcamp-service.
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
    /// Manage bootcamps
    Bootcamp {
        #[command(subcommand)]
        action: BootcampAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum SortArg {
    Name,
    Capabilities,
}

#[derive(Clone, Copy, ValueEnum)]
enum OrderArg {
    Asc,
    Desc,
}

/// Bootcamp management subcommands.
#[derive(Subcommand)]
enum BootcampAction {
    /// List one page of bootcamps
    List {
        /// Zero-based page number
        #[arg(long, default_value_t = PageRequest::DEFAULT_PAGE)]
        page: i64,

        /// Bootcamps per page
        #[arg(long, default_value_t = PageRequest::DEFAULT_SIZE)]
        size: i64,

        #[arg(long, value_enum, default_value_t = SortArg::Name)]
        sort_by: SortArg,

        #[arg(long, value_enum, default_value_t = OrderArg::Asc)]
        order: OrderArg,
    },

    /// Delete a bootcamp and its capability links
    Delete {
        /// Bootcamp id
        id: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection and print table counts
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let pool = server::connect(&config).await?;

    match cli.command {
        Commands::Bootcamp { action } => {
            let state = server::build_state(pool, &config)?;
            handle_bootcamp_action(action, &state).await?
        }
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

async fn handle_bootcamp_action(action: BootcampAction, state: &AppState) -> Result<()> {
    match action {
        BootcampAction::List {
            page,
            size,
            sort_by,
            order,
        } => {
            let sort_by = match sort_by {
                SortArg::Name => SortField::Name,
                SortArg::Capabilities => SortField::CapabilityCount,
            };
            let direction = match order {
                OrderArg::Asc => SortDirection::Asc,
                OrderArg::Desc => SortDirection::Desc,
            };
            list_bootcamps(state, PageRequest::new(page, size, sort_by, direction)).await
        }
        BootcampAction::Delete { id, yes } => delete_bootcamp(state, id, yes).await,
    }
}

/// Prints one page of bootcamps as a table.
///
/// # Output Format
///
/// ```text
///   Name                           Launch       Weeks  Capabilities
///   ─────────────────────────────────────────────────────────────────
///   Backend Bootcamp               2024-01-01   8      2
///     · APIs (3 technologies)
/// ```
async fn list_bootcamps(state: &AppState, request: PageRequest) -> Result<()> {
    println!("{}", "📋 Bootcamps".bright_blue().bold());
    println!();

    let page = state
        .listing_service
        .list_bootcamps(request)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list bootcamps: {}", e))?;

    if page.content.is_empty() {
        println!("{}", "  No bootcamps on this page".yellow());
        println!();
        println!(
            "  Total: {}",
            page.total_elements.to_string().bright_white().bold()
        );
        return Ok(());
    }

    println!(
        "  {:<30} {:<12} {:<6} {}",
        "Name".bright_white().bold(),
        "Launch".bright_white().bold(),
        "Weeks".bright_white().bold(),
        "Capabilities".bright_white().bold()
    );
    println!("  {}", "─".repeat(65).bright_black());

    for bootcamp in &page.content {
        println!(
            "  {:<30} {:<12} {:<6} {}",
            bootcamp.name.cyan(),
            bootcamp.launch_date.to_string().bright_black(),
            bootcamp.duration_weeks,
            bootcamp.capability_count
        );
        println!("    {}", bootcamp.id.bright_black());
        for capability in &bootcamp.capabilities {
            println!(
                "    · {} ({} technologies)",
                capability.name,
                capability.technology_count
            );
        }
    }

    println!();
    println!(
        "  Page {} of {} · Total: {}",
        page.page.to_string().bright_white().bold(),
        page.total_pages.to_string().bright_white().bold(),
        page.total_elements.to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Deletes a bootcamp with confirmation prompt (default: No).
async fn delete_bootcamp(state: &AppState, id: String, yes: bool) -> Result<()> {
    println!("{}", "🗑  Delete Bootcamp".bright_blue().bold());
    println!();
    println!("  ID: {}", id.cyan());
    println!();

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt("Delete this bootcamp and its capability links?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    state
        .bootcamp_service
        .delete_bootcamp(&id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete bootcamp: {}", e))?;

    println!();
    println!("{}", "✅ Bootcamp deleted".green().bold());
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
            println!();

            for table in [
                "bootcamps",
                "capabilities",
                "technologies",
                "bootcamp_capability",
                "capability_technology",
            ] {
                let count: i64 =
                    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM bootcamp.{table}"))
                        .fetch_one(pool)
                        .await
                        .with_context(|| format!("Failed to count bootcamp.{table}"))?;

                println!(
                    "  {:<24} {}",
                    table,
                    count.to_string().bright_green().bold()
                );
            }
            println!();
        }
    }

    Ok(())
}
