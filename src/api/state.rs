use tokio_rusqlite::Connection;

use crate::core::AppConfig;

/// Shared across request handlers. Nothing here mutates after
/// startup; the store is the only shared mutable resource.
pub struct AppState {
    pub db: Connection,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(db: Connection, config: AppConfig) -> Self {
        Self { db, config }
    }
}
