//! Database migration command.
//!
//! Migrations live in `crates/auth/migrations/` and are embedded into the
//! binary at compile time. They only ever run through this command, never
//! implicitly at startup.

use quizmill_auth::config::{AuthConfig, ConfigError};

/// Errors that can occur while running migrations.
#[derive(Debug, thiserror::Error)]
pub enum MigrateError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Run all pending database migrations.
///
/// # Errors
///
/// Returns `MigrateError` if configuration, connection, or a migration
/// fails. A failed migration leaves the database at the last successfully
/// applied version.
pub async fn run() -> Result<(), MigrateError> {
    let config = AuthConfig::from_env()?;

    tracing::info!("Connecting to database...");
    let pool = quizmill_auth::db::create_pool(&config.database_url).await?;

    tracing::info!("Running migrations...");
    sqlx::migrate!("../auth/migrations").run(&pool).await?;

    tracing::info!("Migrations complete");
    Ok(())
}
