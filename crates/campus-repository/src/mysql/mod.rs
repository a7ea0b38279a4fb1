//! MySQL backend.

mod session;
pub mod rows;

pub use session::MySqlSession;

use crate::traits::Store;
use crate::DatabasePool;
use campus_core::{CampusResult, HealthCheck, HealthStatus};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// Store backed by a MySQL connection pool. Each session is a transaction.
#[derive(Clone, Debug)]
pub struct MySqlStore {
    pool: Arc<DatabasePool>,
}

impl MySqlStore {
    /// Creates a store over an existing pool.
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self { pool }
    }

    /// Returns the underlying pool.
    #[must_use]
    pub fn pool(&self) -> &DatabasePool {
        &self.pool
    }
}

#[async_trait]
impl Store for MySqlStore {
    type Session = MySqlSession;

    async fn begin(&self) -> CampusResult<MySqlSession> {
        debug!("Opening MySQL transaction");
        let tx = self.pool.inner().begin().await?;
        Ok(MySqlSession::new(tx))
    }
}

#[async_trait]
impl HealthCheck for MySqlStore {
    fn name(&self) -> &str {
        "mysql"
    }

    async fn check(&self) -> HealthStatus {
        match self.pool.health_check().await {
            Ok(()) => HealthStatus::Healthy,
            Err(e) => HealthStatus::Unhealthy(e.to_string()),
        }
    }
}
