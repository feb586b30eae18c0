//! Review Collector server binary.
//!
//! Loads configuration, opens the review database, and serves the webhook
//! and review API until Ctrl-C.

use std::sync::Arc;

use thiserror::Error;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use review_collector::adapters::http::{api_router, HttpHandlers};
use review_collector::adapters::sqlite::{self, SqliteReviewRepository};
use review_collector::adapters::storage::InMemoryConversationStore;
use review_collector::config::{AppConfig, ValidationError};

/// Failures that stop the server from starting.
#[derive(Debug, Error)]
enum StartupError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ValidationError),

    #[error("Database connection failed: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Database migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            // Tracing is configured from this config, so it is not up yet.
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_tracing(&config);

    if let Err(e) = run(config).await {
        error!(error = %e, "Server failed");
        std::process::exit(1);
    }
}

/// Initializes the tracing subscriber. `RUST_LOG` overrides the configured level.
fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .init();
    }
}

async fn run(config: AppConfig) -> Result<(), StartupError> {
    config.validate()?;
    let addr = config.server.socket_addr()?;

    let pool = sqlite::connect(&config.database).await?;
    if config.database.run_migrations {
        sqlite::run_migrations(&pool).await?;
        info!("Database migrations applied");
    }

    let handlers = HttpHandlers::from_ports(
        Arc::new(InMemoryConversationStore::new()),
        Arc::new(SqliteReviewRepository::new(pool.clone())),
        config.conversation.persist_timeout(),
        config.database.query_timeout(),
    );
    let app = api_router(handlers, &config.server);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, environment = ?config.server.environment, "Review collector listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    info!("Review collector shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
