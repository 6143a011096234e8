//! Store interfaces.
//!
//! The auth service holds no storage of its own; it talks to an account
//! store and a session store through these traits. Adapters translate their
//! backend's failure modes into [`RepositoryError`] - in particular a
//! unique-constraint rejection must surface as [`RepositoryError::Conflict`],
//! because the service relies on that signal (not on a pre-check) to detect
//! duplicate registrations under concurrency.

use async_trait::async_trait;

use quizmill_core::{Email, SessionToken, UserId};

use crate::db::RepositoryError;
use crate::models::User;

/// Input for creating an account.
///
/// The password hash is an opaque PHC string produced by the service's
/// hasher; stores persist it verbatim and never interpret it.
#[derive(Debug, Clone)]
pub struct NewAccount {
    /// Validated email address (unique across accounts).
    pub email: Email,
    /// Opaque password hash.
    pub password_hash: String,
}

/// Durable storage of user accounts, keyed by id with a unique email index.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Insert a new account.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Conflict`] if the email is already taken;
    /// any other failure is operational.
    async fn create(&self, account: NewAccount) -> Result<User, RepositoryError>;

    /// Find an account by its ID.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError>;

    /// Find an account by its email address.
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, RepositoryError>;

    /// Fetch an account together with its stored password hash, for
    /// credential verification. Returns `None` if no such account exists.
    async fn find_credentials(
        &self,
        email: &Email,
    ) -> Result<Option<(User, String)>, RepositoryError>;

    /// Delete an account (administrative path; sessions cascade).
    ///
    /// Returns `true` if an account was deleted, `false` if none existed.
    async fn delete(&self, id: UserId) -> Result<bool, RepositoryError>;
}

/// Durable storage of sessions, keyed by token with a foreign reference to
/// the owning user.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Persist a new session binding `token` to `user_id`.
    async fn insert(&self, token: &SessionToken, user_id: UserId) -> Result<(), RepositoryError>;

    /// Resolve a token to its owning user (joined lookup). Returns `None`
    /// if the token does not match an active session.
    async fn find_user_by_token(
        &self,
        token: &SessionToken,
    ) -> Result<Option<User>, RepositoryError>;

    /// Delete the session matching `token`, returning how many sessions were
    /// removed. Zero is a valid outcome, not an error.
    async fn delete_by_token(&self, token: &SessionToken) -> Result<u64, RepositoryError>;
}
