//! CLI tool for seeding and inspecting the link board database.
//!
//! # Usage
//!
//! ```bash
//! # Insert 10 sample links (asks for confirmation)
//! cargo run --bin seed -- links
//!
//! # Insert 50 sample links without prompting
//! cargo run --bin seed -- links --count 50 --yes
//!
//! # List stored links
//! cargo run --bin seed -- list
//!
//! # Check database connection
//! cargo run --bin seed -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (or the `DB_*` components): PostgreSQL connection
//!
//! Sample links are random but always pass the submission rules, so they
//! are meant for development and staging databases only.

use link_board::config::Config;
use link_board::domain::repositories::LinkRepository;
use link_board::domain::sample;
use link_board::infrastructure::persistence::PgLinkRepository;
use link_board::server::connect_database;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// Number of links inserted when `--count` is not given.
const DEFAULT_SEED_COUNT: usize = 10;

/// CLI tool for seeding link-board.
#[derive(Parser)]
#[command(name = "seed")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Insert randomly generated sample links
    Links {
        /// Number of links to insert
        #[arg(short, long, default_value_t = DEFAULT_SEED_COUNT)]
        count: usize,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List stored links
    List,

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
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = Config::from_env()?;
    let database_url = config
        .database_url
        .clone()
        .context("DATABASE_URL must be set")?;

    let pool = connect_database(&database_url, &config).await?;

    match cli.command {
        Commands::Links { count, yes } => seed_links(&pool, count, yes).await?,
        Commands::List => list_links(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Inserts `count` sample links after an optional confirmation.
async fn seed_links(pool: &PgPool, count: usize, skip_confirm: bool) -> Result<()> {
    println!("{}", "🌱 Seed Sample Links".bright_blue().bold());
    println!();

    if count == 0 {
        println!("{}", "Nothing to do: --count is 0".yellow());
        return Ok(());
    }

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt(format!("Insert {count} sample links?"))
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let repo = PgLinkRepository::new(Arc::new(pool.clone()));

    let links = sample::seed(&repo, count)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to insert link: {}", e))?;

    for link in &links {
        println!(
            "  {} {}",
            format!("#{}", link.id).bright_black(),
            link.title.cyan()
        );
    }

    println!();
    println!(
        "{}",
        format!("✅ Inserted {} links", links.len()).green().bold()
    );
    println!();

    Ok(())
}

/// Lists every stored link.
///
/// # Output Format
///
/// ```text
/// 📋 Links
///
///   ID   Title                          URL
///   ───────────────────────────────────────────────────────────────────
///   1    Example Title                  http://example.com
/// ```
async fn list_links(pool: &PgPool) -> Result<()> {
    println!("{}", "📋 Links".bright_blue().bold());
    println!();

    let repo = PgLinkRepository::new(Arc::new(pool.clone()));
    let links = repo
        .list_all()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list links: {}", e))?;

    if links.is_empty() {
        println!("{}", "  No links found".yellow());
        println!();
        println!(
            "  Seed some with: {} seed -- links",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<4} {:<30} {:<40}",
        "ID".bright_white().bold(),
        "Title".bright_white().bold(),
        "URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for link in &links {
        println!(
            "  {:<4} {:<30} {}",
            link.id.to_string().bright_black(),
            truncate(&link.title, 30).cyan(),
            link.url
        );
    }

    println!();
    println!("  Total: {}", links.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            let repo = PgLinkRepository::new(Arc::new(pool.clone()));
            let count = repo
                .count()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to count links: {}", e))?;

            println!("{}", "✅ Database connection OK".green().bold());
            println!("  Links: {}", count.to_string().bright_green().bold());
        }
    }

    Ok(())
}

/// Shortens `text` to at most `max` characters, marking the cut with `…`.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut short: String = text.chars().take(max.saturating_sub(1)).collect();
    short.push('…');
    short
}
