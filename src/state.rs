// src/state.rs
// DOCUMENTATION: Application context shared across handlers
// PURPOSE: Built once in main.rs and injected with web::Data

use crate::config::Config;
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct AppState {
    pool: SqlitePool,
    config: Config,
}

impl AppState {
    pub fn new(pool: SqlitePool, config: Config) -> Self {
        Self { pool, config }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

#[cfg(test)]
impl AppState {
    /// Fresh in-memory database with the schema applied
    pub async fn for_tests() -> Self {
        let config = Config::in_memory();
        let pool = crate::db::test_pool().await;
        Self::new(pool, config)
    }
}
