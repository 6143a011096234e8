//! Authentication service.
//!
//! Orchestrates the account and session stores: registration, credential
//! login, token resolution, and logout. The service itself is stateless
//! apart from its injected collaborators, so one instance can serve any
//! number of concurrent callers.

mod error;
pub mod password;
pub mod token;
pub mod validate;

pub use error::AuthError;
pub use password::{Hasher, HasherError};
pub use validate::FieldError;

use std::sync::Arc;

use quizmill_core::{Email, SessionToken};

use crate::db::RepositoryError;
use crate::models::User;
use crate::store::{AccountStore, NewAccount, SessionStore};

/// Authentication service.
///
/// Generic over its stores; tests run it against the in-memory adapters,
/// production against `PostgreSQL`.
pub struct AuthService<A, S> {
    accounts: Arc<A>,
    sessions: Arc<S>,
    hasher: Hasher,
}

impl<A, S> AuthService<A, S>
where
    A: AccountStore,
    S: SessionStore,
{
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(accounts: Arc<A>, sessions: Arc<S>, hasher: Hasher) -> Self {
        Self {
            accounts,
            sessions,
            hasher,
        }
    }

    /// Register a new account with email and password.
    ///
    /// Validation, hashing, then a single insert. Duplicate detection rides
    /// on the store's uniqueness constraint: under concurrent registration
    /// of the same email exactly one call wins and the rest get
    /// `DuplicateAccount`.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Validation` if the credentials fail validation.
    /// Returns `AuthError::DuplicateAccount` if the email is already taken.
    pub async fn register(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let errors = validate::registration(email, password);
        if !errors.is_empty() {
            return Err(AuthError::Validation(errors));
        }

        // Validation just accepted this email shape.
        let email = Email::parse(email).map_err(|e| {
            AuthError::Validation(vec![FieldError {
                field: "email",
                message: e.to_string(),
            }])
        })?;

        let password_hash = self.hasher.hash(password)?;

        let user = self
            .accounts
            .create(NewAccount {
                email,
                password_hash,
            })
            .await
            .map_err(|e| match e {
                RepositoryError::Conflict(_) => AuthError::DuplicateAccount,
                other => AuthError::Store(other),
            })?;

        tracing::info!(user_id = %user.id, "account registered");
        Ok(user)
    }

    /// Login with email and password, issuing a fresh session token.
    ///
    /// Both failure modes (unknown email, wrong password) return the same
    /// `InvalidCredentials` error, and both cost one Argon2 verification:
    /// when no account matches, the password is verified against a baseline
    /// hash instead of being skipped.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Validation` if the credentials are malformed.
    /// Returns `AuthError::InvalidCredentials` if they do not match an
    /// account.
    pub async fn login(&self, email: &str, password: &str) -> Result<SessionToken, AuthError> {
        let errors = validate::login(email, password);
        if !errors.is_empty() {
            return Err(AuthError::Validation(errors));
        }
        let email = Email::parse(email).map_err(|_| AuthError::InvalidCredentials)?;

        let Some((user, password_hash)) = self.accounts.find_credentials(&email).await? else {
            self.hasher.dummy_verify(password);
            return Err(AuthError::InvalidCredentials);
        };

        if !self.hasher.verify(password, &password_hash) {
            return Err(AuthError::InvalidCredentials);
        }

        let token = token::generate();
        self.sessions.insert(&token, user.id).await?;

        tracing::info!(user_id = %user.id, "session issued");
        Ok(token)
    }

    /// Resolve a session token to its owning user.
    ///
    /// Read-only; does not refresh or rotate anything.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidSession` if the token does not match an
    /// active session.
    pub async fn resolve_session(&self, token: &SessionToken) -> Result<User, AuthError> {
        self.sessions
            .find_user_by_token(token)
            .await?
            .ok_or(AuthError::InvalidSession)
    }

    /// Revoke a session token.
    ///
    /// Idempotent: a token that matches nothing (never issued, or already
    /// logged out) is still a successful logout.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Store` only if the store operation itself fails.
    pub async fn logout(&self, token: &SessionToken) -> Result<(), AuthError> {
        let deleted = self.sessions.delete_by_token(token).await?;
        tracing::debug!(deleted, "logout");
        Ok(())
    }

    /// Delete an account by email (administrative path).
    ///
    /// Sessions cascade with the account. Returns `true` if an account was
    /// deleted.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Store` if the store operation fails.
    pub async fn delete_account(&self, email: &Email) -> Result<bool, AuthError> {
        let Some(user) = self.accounts.find_by_email(email).await? else {
            return Ok(false);
        };
        let deleted = self.accounts.delete(user.id).await?;
        if deleted {
            tracing::info!(user_id = %user.id, "account deleted");
        }
        Ok(deleted)
    }
}
