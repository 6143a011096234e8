//! Database operations for the Quizmill `PostgreSQL` store.
//!
//! ## Tables
//!
//! - `users` - player accounts (unique email index, password hash)
//! - `sessions` - login sessions keyed by token, FK to `users`
//!
//! # Migrations
//!
//! Migrations are stored in `crates/auth/migrations/` and run via:
//! ```bash
//! cargo run -p quizmill-cli -- migrate
//! ```
//! They are never run implicitly at startup.

pub mod memory;
pub mod sessions;
pub mod users;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

pub use sessions::PgSessionStore;
pub use users::PgAccountStore;

/// Errors that can occur during store operations.
///
/// This is the narrow, backend-agnostic failure vocabulary the auth service
/// sees: `Conflict` and `NotFound` are data, everything else is operational.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// Constraint violation (e.g., unique email).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Arguments
///
/// * `database_url` - `PostgreSQL` connection string (wrapped in `SecretString`)
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
