//! HTTP server initialization and runtime setup.

use anyhow::{Context, Result};
use sqlx::PgPool;
use std::net::SocketAddr;
use std::sync::Arc;

use crate::application::services::{ExpanderService, ShortenerService};
use crate::config::{Config, Storage};
use crate::domain::repositories::UrlRepository;
use crate::infrastructure::persistence::{MemoryUrlRepository, PgUrlRepository};
use crate::routes::app_router;
use crate::state::AppState;
use crate::utils::code_generator::RandomCodeGenerator;

/// Runs the HTTP server with the given configuration.
///
/// Selects the storage backend, runs migrations and validates the constraint
/// mapping for the postgres backend, wires the services and serves until
/// shutdown (SIGINT).
///
/// # Errors
///
/// Returns an error if the database connection, schema validation, bind or
/// serve fails.
pub async fn run(config: Config) -> Result<()> {
    let repository: Arc<dyn UrlRepository> = match &config.storage {
        Storage::Memory => {
            tracing::info!("Using in-memory storage");
            Arc::new(MemoryUrlRepository::new())
        }
        Storage::Postgres { database_url } => {
            let pool = PgPool::connect(database_url)
                .await
                .context("Failed to connect to database")?;
            tracing::info!("Connected to database");

            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .context("Failed to migrate")?;

            let repository = PgUrlRepository::new(Arc::new(pool));
            repository
                .verify_constraints()
                .await
                .context("Schema does not match the configured constraint mapping")?;

            Arc::new(repository)
        }
    };

    let generator = Arc::new(RandomCodeGenerator::new());
    let shortener = Arc::new(ShortenerService::new(
        Arc::clone(&repository),
        generator,
        config.short_url_prefix.clone(),
        config.code_length,
    ));
    let expander = Arc::new(ExpanderService::new(repository));

    let state = AppState::new(shortener, expander);
    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("invalid listen address: {}", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install shutdown signal handler: {e}");
        return;
    }
    tracing::info!("Gracefully shutting down");
}
