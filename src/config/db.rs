// src/config/db.rs
// DOCUMENTATION: Database connection pool initialization
// PURPOSE: Setup the SQLite connection pool and make sure the schema exists

use crate::config::Config;
use crate::db::SCHEMA;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

/// Initialize SQLite connection pool
/// DOCUMENTATION: Creates the database file if missing, enables foreign keys
/// on every connection and applies the schema (idempotent)
/// Called once during application startup in main.rs
pub async fn init_db_pool(config: &Config) -> Result<SqlitePool, sqlx::Error> {
    log::info!("Initializing database pool: {}", config.database_url);

    let options = SqliteConnectOptions::from_str(&config.database_url)?
        .create_if_missing(true)
        // reviews.student_id references students.id
        .foreign_keys(true)
        .busy_timeout(Duration::from_secs(5));

    let pool = SqlitePoolOptions::new()
        // Maximum concurrent connections
        .max_connections(config.db_max_connections)
        // Timeout waiting for connection from pool
        .acquire_timeout(Duration::from_secs(config.db_connection_timeout))
        // Connection idle timeout (5 minutes)
        .idle_timeout(Duration::from_secs(300))
        // Connection lifetime (30 minutes before recycle)
        .max_lifetime(Duration::from_secs(1800))
        .connect_with(options)
        .await?;

    sqlx::raw_sql(SCHEMA).execute(&pool).await?;

    log::info!("Database pool initialized successfully");
    Ok(pool)
}
