// src/db/mod.rs
// DOCUMENTATION: Database module organization
// PURPOSE: Re-export database components

pub mod review_repository;
pub mod seed;
pub mod student_repository;

pub use review_repository::*;
pub use seed::*;
pub use student_repository::*;

/// Table definitions, applied by `config::init_db_pool`
pub const SCHEMA: &str = include_str!("schema.sql");

#[cfg(test)]
pub(crate) async fn test_pool() -> sqlx::SqlitePool {
    crate::config::init_db_pool(&crate::config::Config::in_memory())
        .await
        .expect("in-memory pool")
}
