//! Account management commands.
//!
//! `create` goes through the same service path as self-registration, so the
//! validation and hashing policy is identical. `delete` is the
//! administrative removal path; the account's sessions cascade with it.

use std::sync::Arc;

use quizmill_core::Email;

use quizmill_auth::config::{AuthConfig, ConfigError};
use quizmill_auth::db::{PgAccountStore, PgSessionStore};
use quizmill_auth::services::auth::{AuthError, AuthService, Hasher, HasherError};

/// Errors that can occur during account commands.
#[derive(Debug, thiserror::Error)]
pub enum UserCommandError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error(transparent)]
    Hasher(#[from] HasherError),

    #[error("invalid email: {0}")]
    InvalidEmail(String),

    #[error(transparent)]
    Auth(#[from] AuthError),
}

async fn build_service()
-> Result<AuthService<PgAccountStore, PgSessionStore>, UserCommandError> {
    let config = AuthConfig::from_env()?;
    let pool = quizmill_auth::db::create_pool(&config.database_url).await?;

    let accounts = Arc::new(PgAccountStore::new(pool.clone()));
    let sessions = Arc::new(PgSessionStore::new(pool));
    let hasher = Hasher::new(config.hasher)?;

    Ok(AuthService::new(accounts, sessions, hasher))
}

/// Register a new account.
///
/// # Errors
///
/// Returns `UserCommandError` if configuration, connection, or registration
/// fails. Validation failures are reported per field.
pub async fn create(email: &str, password: &str) -> Result<(), UserCommandError> {
    let service = build_service().await?;

    match service.register(email, password).await {
        Ok(user) => {
            tracing::info!(user_id = %user.id, "account created");
            Ok(())
        }
        Err(AuthError::Validation(errors)) => {
            for error in &errors {
                tracing::error!(field = error.field, "{}", error.message);
            }
            Err(AuthError::Validation(errors).into())
        }
        Err(e) => Err(e.into()),
    }
}

/// Delete an account by email.
///
/// # Errors
///
/// Returns `UserCommandError` if configuration, connection, or the delete
/// operation fails.
pub async fn delete(email: &str) -> Result<(), UserCommandError> {
    let email =
        Email::parse(email).map_err(|e| UserCommandError::InvalidEmail(e.to_string()))?;

    let service = build_service().await?;

    if service.delete_account(&email).await? {
        tracing::info!("account deleted");
    } else {
        tracing::warn!("no account with that email");
    }
    Ok(())
}
