//! Application builder.

use crate::startup::{print_startup_info, shutdown_signal};
use axum::Router;
use campus_config::{AppConfig, StorageBackend};
use campus_core::{CampusError, CampusResult};
use campus_repository::{create_pool, InMemoryStore, MySqlStore};
use campus_rest::{create_router, AppState};
use std::sync::Arc;
use tracing::info;

/// Application builder for constructing the server.
pub struct AppBuilder {
    config: Option<AppConfig>,
}

impl AppBuilder {
    /// Creates a new application builder.
    pub fn new() -> Self {
        Self { config: None }
    }

    /// Sets the configuration.
    #[must_use]
    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Opens the configured storage backend and builds the router over it.
    pub async fn build_router(&self) -> CampusResult<Router> {
        let config = self.config.clone().unwrap_or_default();
        let state = build_state(&config).await?;
        Ok(create_router(state, &config.server))
    }

    /// Builds and runs the application until a shutdown signal arrives.
    pub async fn run(self) -> CampusResult<()> {
        let router = self.build_router().await?;
        let config = self.config.unwrap_or_default();

        let addr = config.server.addr();
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| CampusError::internal(format!("Failed to bind {}: {}", addr, e)))?;

        print_startup_info(&config);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| CampusError::internal(format!("REST server error: {}", e)))?;

        info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Selects the storage backend and wires the services over it.
pub async fn build_state(config: &AppConfig) -> CampusResult<AppState> {
    info!("Using {} storage backend", config.database.backend);

    match config.database.backend {
        StorageBackend::Memory => AppState::from_store(Arc::new(InMemoryStore::new()), &config.api),
        StorageBackend::Mysql => {
            let pool = create_pool(&config.database).await?;
            if config.database.run_migrations {
                pool.run_migrations().await?;
            }
            AppState::from_store(Arc::new(MySqlStore::new(pool)), &config.api)
        }
    }
}
