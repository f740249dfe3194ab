//! CLI administration tool for fizzbuzz-api.
//!
//! Inspects and maintains the hit statistics without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Show the most requested combination
//! cargo run --bin admin -- top
//!
//! # Wipe all hit counts
//! cargo run --bin admin -- reset
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (or `DB_HOST`, `DB_USER`, ...): PostgreSQL connection

use fizzbuzz_api::AppError;
use fizzbuzz_api::config::{Config, mask_connection_string};
use fizzbuzz_api::domain::repositories::HitRepository;
use fizzbuzz_api::infrastructure::persistence::PgHitRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing fizzbuzz-api.
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
    /// Show the most requested parameter combination
    Top,

    /// Delete all recorded hits
    Reset {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = Config::load_database_url()?;
    let pool = PgPool::connect(&database_url)
        .await
        .with_context(|| {
            format!(
                "Failed to connect to database {}",
                mask_connection_string(&database_url)
            )
        })?;

    let repo = PgHitRepository::new(Arc::new(pool.clone()));

    match cli.command {
        Commands::Top => show_top(&repo).await?,
        Commands::Reset { yes } => reset_hits(&repo, yes).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Prints the most requested combination.
///
/// # Output Format
///
/// ```text
/// 📊 Most requested FizzBuzz
///
///   int1:  3
///   int2:  5
///   limit: 100
///   str1:  fizz
///   str2:  buzz
///   hits:  42
/// ```
async fn show_top(repo: &PgHitRepository) -> Result<()> {
    println!("{}", "📊 Most requested FizzBuzz".bright_blue().bold());
    println!();

    let record = match repo.top_hit().await {
        Ok(record) => record,
        Err(AppError::NotFound { .. }) => {
            println!("{}", "  No requests recorded yet".yellow());
            return Ok(());
        }
        Err(e) => return Err(anyhow::anyhow!("Failed to load statistics: {}", e)),
    };

    let combinations = repo
        .count_combinations()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count combinations: {}", e))?;

    let input = &record.input;
    println!("  int1:  {}", input.int1.to_string().cyan());
    println!("  int2:  {}", input.int2.to_string().cyan());
    println!("  limit: {}", input.limit.to_string().cyan());
    println!("  str1:  {}", input.str1.cyan());
    println!("  str2:  {}", input.str2.cyan());
    println!(
        "  hits:  {}",
        record.hits.to_string().bright_green().bold()
    );
    println!();
    println!(
        "  Distinct combinations: {}",
        combinations.to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Truncates the hit table after confirmation (default: No).
async fn reset_hits(repo: &PgHitRepository, skip_confirm: bool) -> Result<()> {
    println!("{}", "🧹 Reset hit statistics".bright_blue().bold());
    println!();

    let combinations = repo
        .count_combinations()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count combinations: {}", e))?;

    println!(
        "  {} recorded combinations will be deleted.",
        combinations.to_string().bright_white().bold()
    );
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete all hit counts?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    repo.reset()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to reset statistics: {}", e))?;

    println!("{}", "✅ Hit statistics reset".green().bold());
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").execute(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            let migrations: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM _sqlx_migrations")
                .fetch_one(pool)
                .await
                .unwrap_or(0);

            println!("  PostgreSQL: {}", version.bright_white());
            println!("  Migrations: {}", migrations.to_string().bright_white());
            println!();
        }
    }

    Ok(())
}
