use std::sync::Arc;
use std::time::Duration;

use actix_web::{web, HttpServer};
use anyhow::Context;
use lk_core::repositories::{
    AccountRepository, InMemoryAccountRepository, InMemoryRevocationRepository,
    RevocationRepository,
};
use lk_core::services::{RevocationCleanupService, SessionService};
use lk_infra::database::{DatabasePool, MySqlAccountRepository, MySqlRevocationRepository};
use lk_shared::{AppConfig, DatabaseConfig, StorageBackend};
use tracing::{info, warn};

use lk_api::app::{create_app, AppState};
use lk_api::telemetry::init_tracing;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env().context("Failed to load configuration")?;
    init_tracing(&config.logging);

    info!("Starting Latchkey API Server ({})", config.environment);

    config.validate().context("Invalid configuration")?;
    if config.auth.jwt.is_using_default_secret() {
        warn!("JWT_SECRET is not set; using the development secret");
    }

    let (accounts, revocations, pool) = build_repositories(&config.database).await?;

    let sessions = Arc::new(
        SessionService::from_config(accounts, revocations.clone(), &config.auth)
            .context("Failed to build session service")?,
    );

    let cleanup = Arc::new(RevocationCleanupService::new(
        revocations,
        config.auth.cleanup.clone(),
    ));
    let cleanup_task = cleanup.start_background_task();

    let state = web::Data::new(
        AppState::new(sessions).with_max_payload_size(config.server.max_payload_size),
    );
    let cors = config.cors.clone();

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || create_app(state.clone(), &cors))
        .keep_alive(Duration::from_secs(config.server.keep_alive));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?
        .run()
        .await?;

    if let Some(task) = cleanup_task {
        task.abort();
    }
    if let Some(pool) = pool {
        pool.close().await;
    }

    info!("Server stopped");
    Ok(())
}

/// Stores for the configured backend, plus the pool backing them if any
type Repositories = (
    Arc<dyn AccountRepository>,
    Arc<dyn RevocationRepository>,
    Option<DatabasePool>,
);

/// Build the account and revocation stores for the configured backend
async fn build_repositories(config: &DatabaseConfig) -> anyhow::Result<Repositories> {
    match config.backend {
        StorageBackend::Memory => {
            warn!("Using in-memory storage; accounts and revocations are lost on restart");
            let accounts: Arc<dyn AccountRepository> = Arc::new(InMemoryAccountRepository::new());
            let revocations: Arc<dyn RevocationRepository> =
                Arc::new(InMemoryRevocationRepository::new());
            Ok((accounts, revocations, None))
        }
        StorageBackend::MySql => {
            let pool = DatabasePool::new(config.clone())
                .await
                .context("Failed to connect to MySQL")?;
            pool.run_migrations()
                .await
                .context("Failed to run database migrations")?;

            let accounts: Arc<dyn AccountRepository> =
                Arc::new(MySqlAccountRepository::new(pool.get_pool().clone()));
            let revocations: Arc<dyn RevocationRepository> =
                Arc::new(MySqlRevocationRepository::new(pool.get_pool().clone()));
            Ok((accounts, revocations, Some(pool)))
        }
    }
}
