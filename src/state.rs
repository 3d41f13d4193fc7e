//! Application state for LinkHub.
//!
//! Contains the shared state that is passed to all handlers.

use crate::db::DbPool;
use crate::{config, Result};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: DbPool,
}

impl AppState {
    /// Create a new application state, initializing the database.
    pub async fn new() -> Result<Self> {
        let config = config::config();

        let db = crate::db::init_pool(&config.database.path).await?;
        crate::db::initialize_schema(&db).await?;

        Ok(Self { db })
    }

    /// Build state around an existing pool (used by tests).
    pub fn with_pool(db: DbPool) -> Self {
        Self { db }
    }
}
