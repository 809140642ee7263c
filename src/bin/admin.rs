//! CLI administration tool for hero-gate.
//!
//! Provides statistics, database diagnostics and manual gate entry
//! completion without requiring HTTP API access.
//!
//! # Usage
//!
//! ```bash
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Mark a gate entry Completed
//! cargo run --bin admin -- gate complete 0b6f1c9e-6b1a-4f43-9a4e-2f1f0e0d9c11
//! ```
//!
//! # Environment Variables
//!
//! Same database variables as the server: `DATABASE_URL`, or `DB_HOST`,
//! `DB_PORT`, `DB_USER`, `DB_PASSWORD` and `DB_NAME`.

use hero_gate::application::services::GateEntryService;
use hero_gate::config;
use hero_gate::domain::entities::GateStatus;
use hero_gate::infrastructure::persistence::PgGateEntryRepository;
use hero_gate::server::connect_pool;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

/// CLI tool for managing hero-gate.
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
    /// Show row counts
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },

    /// Gate entry operations
    Gate {
        #[command(subcommand)]
        action: GateAction,
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

/// Gate entry subcommands.
#[derive(Subcommand)]
enum GateAction {
    /// Mark a gate entry Completed
    Complete {
        /// Gate entry uuid
        uuid: Uuid,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let pool = connect_pool(&config).await?;

    match cli.command {
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
        Commands::Gate { action } => handle_gate_action(action, pool).await?,
    }

    Ok(())
}

/// Displays row counts.
///
/// Shows:
/// - Heroes and teams
/// - Gate entries by status
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let heroes_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM hero")
        .fetch_one(pool)
        .await?;

    let teams_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM team")
        .fetch_one(pool)
        .await?;

    let released_count = count_entries(pool, GateStatus::Released).await?;
    let completed_count = count_entries(pool, GateStatus::Completed).await?;

    println!(
        "  Heroes:                 {}",
        heroes_count.to_string().bright_green().bold()
    );
    println!(
        "  Teams:                  {}",
        teams_count.to_string().bright_green().bold()
    );
    println!(
        "  Gate entries released:  {}",
        released_count.to_string().bright_yellow().bold()
    );
    println!(
        "  Gate entries completed: {}",
        completed_count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

async fn count_entries(pool: &PgPool, status: GateStatus) -> Result<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM gate_entry WHERE status = $1")
        .bind(status.code())
        .fetch_one(pool)
        .await?;
    Ok(count)
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

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

/// Handles gate entry commands.
async fn handle_gate_action(action: GateAction, pool: PgPool) -> Result<()> {
    let service = GateEntryService::new(Arc::new(PgGateEntryRepository::new(Arc::new(pool))));

    match action {
        GateAction::Complete { uuid, yes } => complete_entry(&service, uuid, yes).await,
    }
}

/// Marks an entry Completed after showing it and asking for confirmation.
///
/// # Safety
///
/// - Requires confirmation (default: No) unless `--yes` is given
/// - Completion cannot be undone through the API
async fn complete_entry(
    service: &GateEntryService<PgGateEntryRepository>,
    uuid: Uuid,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "🚧 Complete Gate Entry".bright_blue().bold());
    println!();

    let entry = service
        .get_entry(uuid)
        .await
        .with_context(|| format!("Gate entry {uuid} not found"))?;

    if entry.status.is_terminal() {
        println!("{}", "⚠️  This entry is already completed".yellow());
        return Ok(());
    }

    println!("  UUID:   {}", entry.uuid.to_string().bright_black());
    println!("  Site:   {}", entry.site_id.to_string().cyan());
    println!("  Plate:  {}", entry.vehicle_license_plate.cyan());
    println!(
        "  Driver: {}",
        entry.driver_id.as_deref().unwrap_or("-").cyan()
    );
    println!(
        "  Entry:  {}",
        entry
            .entry_dstamp
            .format("%Y-%m-%d %H:%M")
            .to_string()
            .bright_black()
    );
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Mark this entry completed?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service
        .complete_entry(uuid)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to complete entry: {}", e))?;

    println!();
    println!("{}", "✅ Gate entry completed".green().bold());
    println!();

    Ok(())
}
