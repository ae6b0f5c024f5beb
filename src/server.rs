//! HTTP server initialization and runtime setup.
//!
//! Handles credential store setup, migrations, and the Axum server lifecycle.

use crate::config::{Config, CredentialStore};
use crate::domain::repositories::CredentialRepository;
use crate::infrastructure::persistence::{MemoryCredentialRepository, PgCredentialRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Credential store (PostgreSQL pool with migrations, or in-memory)
/// - Axum HTTP server with graceful shutdown on Ctrl+C / SIGTERM
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let repository = connect_credential_store(&config).await?;

    tracing::warn!("Passwords are stored and compared in plaintext");

    let state = AppState::from_repository(repository);

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid LISTEN address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

/// Builds the credential repository selected by `CREDENTIAL_STORE`.
async fn connect_credential_store(config: &Config) -> Result<Arc<dyn CredentialRepository>> {
    match config.credential_store {
        CredentialStore::Postgres => {
            let database_url = config
                .database_url
                .as_deref()
                .context("DATABASE_URL is required when CREDENTIAL_STORE=postgres")?;

            let pool = PgPoolOptions::new()
                .max_connections(config.db_max_connections)
                .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
                .idle_timeout(Duration::from_secs(config.db_idle_timeout))
                .max_lifetime(Duration::from_secs(config.db_max_lifetime))
                .connect(database_url)
                .await
                .context("Failed to connect to database")?;
            tracing::info!("Connected to database");

            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .context("Failed to apply migrations")?;
            tracing::info!("Migrations applied");

            Ok(Arc::new(PgCredentialRepository::new(Arc::new(pool))))
        }
        CredentialStore::Memory => {
            tracing::warn!(
                seeded = config.credentials_seed.len(),
                "Using in-memory credential store, records are lost on restart"
            );

            Ok(Arc::new(MemoryCredentialRepository::with_credentials(
                config.credentials_seed.iter().cloned(),
            )))
        }
    }
}

/// Resolves when the process receives Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
