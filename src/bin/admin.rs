//! CLI administration tool for credential-login.
//!
//! Manages credential records directly in the database. The HTTP service
//! only reads the `credentials` table; records are created and removed here.
//!
//! # Usage
//!
//! ```bash
//! # Create a credential (prompts for missing values)
//! cargo run --bin admin -- credential create -u alice
//!
//! # List all credentials
//! cargo run --bin admin -- credential list
//!
//! # Delete a credential by ID
//! cargo run --bin admin -- credential delete 3
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` or `DB_HOST`/`DB_USER`/`DB_PASSWORD`/`DB_NAME`

use credential_login::config::{Config, mask_connection_string};
use credential_login::domain::entities::NewCredential;
use credential_login::domain::repositories::CredentialRepository;
use credential_login::infrastructure::persistence::PgCredentialRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input, Password};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing credential-login.
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
    /// Manage credential records
    Credential {
        #[command(subcommand)]
        action: CredentialAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Credential management subcommands.
#[derive(Subcommand)]
enum CredentialAction {
    /// Create a new credential
    Create {
        /// Username
        #[arg(short, long)]
        username: Option<String>,

        /// Password (prompted if omitted)
        #[arg(short, long)]
        password: Option<String>,

        /// Generate a random password instead of prompting
        #[arg(short, long, conflicts_with = "password")]
        generate: bool,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List all credentials
    List,

    /// Delete a credential
    Delete {
        /// Credential ID
        id: i64,

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

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = Config::load_database_url().context("Database is not configured")?;

    let pool = PgPool::connect(&database_url)
        .await
        .with_context(|| {
            format!(
                "Failed to connect to {}",
                mask_connection_string(&database_url)
            )
        })?;

    match cli.command {
        Commands::Credential { action } => handle_credential_action(action, &pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches credential management commands.
async fn handle_credential_action(action: CredentialAction, pool: &PgPool) -> Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("Failed to apply migrations")?;

    let repo = Arc::new(PgCredentialRepository::new(Arc::new(pool.clone())));

    match action {
        CredentialAction::Create {
            username,
            password,
            generate,
            yes,
        } => create_credential(repo, username, password, generate, yes).await?,
        CredentialAction::List => list_credentials(repo).await?,
        CredentialAction::Delete { id, yes } => delete_credential(repo, id, yes).await?,
    }

    Ok(())
}

/// Creates a credential with interactive prompts for missing values.
///
/// The password is stored as entered. Duplicate usernames are allowed.
async fn create_credential(
    repo: Arc<PgCredentialRepository>,
    username: Option<String>,
    password: Option<String>,
    generate: bool,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "🔑 Create Credential".bright_blue().bold());
    println!();

    let username = match username {
        Some(u) => u,
        None => Input::new()
            .with_prompt("Username")
            .allow_empty(true)
            .interact_text()?,
    };

    let password = match (password, generate) {
        (Some(p), _) => p,
        (None, true) => {
            let generated = generate_password();
            println!("{}", "✨ Generated password".green());
            println!("  Password: {}", generated.bright_yellow().bold());
            generated
        }
        (None, false) => Password::new()
            .with_prompt("Password")
            .with_confirmation("Repeat password", "Passwords do not match")
            .allow_empty_password(true)
            .interact()?,
    };

    println!();
    println!("  Username: {}", username.cyan());
    println!(
        "{}",
        "⚠️  Passwords are stored in plaintext.".yellow().bold()
    );
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this credential?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let credential = repo
        .create(NewCredential { username, password })
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create credential: {}", e))?;

    println!();
    println!(
        "{} (ID {})",
        "✅ Credential created".green().bold(),
        credential.id.to_string().bright_white()
    );
    println!();

    Ok(())
}

/// Lists all credentials without revealing passwords.
///
/// # Output Format
///
/// ```text
/// 📋 Credentials
///
///   ID  Username                       Created
///   ─────────────────────────────────────────────────────────
///   2   bob                            2025-01-16 14:20
///   1   alice                          2025-01-15 10:30
/// ```
async fn list_credentials(repo: Arc<PgCredentialRepository>) -> Result<()> {
    println!("{}", "📋 Credentials".bright_blue().bold());
    println!();

    let credentials = repo
        .list()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list credentials: {}", e))?;

    if credentials.is_empty() {
        println!("{}", "  No credentials found".yellow());
        println!();
        println!(
            "  Create one with: {} admin credential create",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<3} {:<30} {:<20}",
        "ID".bright_white().bold(),
        "Username".bright_white().bold(),
        "Created".bright_white().bold(),
    );
    println!("  {}", "─".repeat(57).bright_black());

    for credential in &credentials {
        println!(
            "  {:<3} {:<30} {}",
            credential.id.to_string().bright_black(),
            credential.username.cyan(),
            credential
                .created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
        );
    }

    println!();
    println!(
        "  Total: {}",
        credentials.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Deletes a credential by ID with confirmation prompt (default: No).
async fn delete_credential(
    repo: Arc<PgCredentialRepository>,
    id: i64,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "🗑️  Delete Credential".bright_blue().bold());
    println!();

    let credential = repo
        .find_by_id(id)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .context("Credential not found")?;

    println!("  Username: {}", credential.username.cyan());
    println!("  ID:       {}", credential.id.to_string().bright_black());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this credential?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let deleted = repo
        .delete(credential.id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete credential: {}", e))?;

    println!();
    if deleted {
        println!("{}", "✅ Credential deleted".green().bold());
    } else {
        println!("{}", "⚠️  Credential was already removed".yellow());
    }
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
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            let credentials_count: Option<i64> =
                sqlx::query_scalar("SELECT COUNT(*) FROM credentials")
                    .fetch_one(pool)
                    .await
                    .ok();

            println!("  PostgreSQL:  {}", version.bright_white());
            match credentials_count {
                Some(count) => println!(
                    "  Credentials: {}",
                    count.to_string().bright_green().bold()
                ),
                None => println!("  Credentials: {}", "table not created yet".yellow()),
            }
            println!();
        }
    }

    Ok(())
}

/// Generates a random password.
///
/// # Format
///
/// - Length: 20 characters
/// - Character set: A-Z, a-z, 0-9
fn generate_password() -> String {
    use rand::Rng;
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
    const PASSWORD_LEN: usize = 20;

    let mut rng = rand::rng();

    (0..PASSWORD_LEN)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}
