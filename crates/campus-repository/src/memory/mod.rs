//! In-memory backend.
//!
//! All tables sit behind one async mutex. A session owns the lock for its
//! whole lifetime, so sessions run one at a time.

mod session;
mod table;

pub use session::MemorySession;
pub use table::{Table, Tables};

use crate::traits::Store;
use campus_core::{CampusResult, HealthCheck, HealthStatus};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Process-local store. Cloning shares the same tables.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl InMemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl std::fmt::Debug for InMemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryStore").finish_non_exhaustive()
    }
}

#[async_trait]
impl Store for InMemoryStore {
    type Session = MemorySession;

    async fn begin(&self) -> CampusResult<MemorySession> {
        let guard = Arc::clone(&self.tables).lock_owned().await;
        Ok(MemorySession::new(guard))
    }
}

#[async_trait]
impl HealthCheck for InMemoryStore {
    fn name(&self) -> &str {
        "memory"
    }

    async fn check(&self) -> HealthStatus {
        HealthStatus::Healthy
    }
}
