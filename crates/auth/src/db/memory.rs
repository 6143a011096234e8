//! In-memory store adapters.
//!
//! These implement the same contract as the `PostgreSQL` adapters against
//! process-local maps: the email uniqueness signal, the joined token
//! resolution, and the cascade that reclaims a user's sessions when the
//! account is deleted. Both adapters share one backing store, the way the
//! `PostgreSQL` adapters share one database. They are the primary test
//! double for the auth service and are also usable for embedding or demos
//! where durability does not matter.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use chrono::Utc;

use quizmill_core::{Email, SessionToken, UserId};

use super::RepositoryError;
use crate::models::User;
use crate::store::{AccountStore, NewAccount, SessionStore};

/// Shared backing store for the memory adapters.
#[derive(Default)]
struct MemoryInner {
    next_id: i32,
    // id -> (projection, password hash)
    accounts: HashMap<i32, (User, String)>,
    // token -> owning user id
    sessions: HashMap<String, UserId>,
}

fn lock(inner: &Mutex<MemoryInner>) -> MutexGuard<'_, MemoryInner> {
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}

/// In-memory implementation of [`AccountStore`].
#[derive(Default)]
pub struct MemoryAccountStore {
    inner: Arc<Mutex<MemoryInner>>,
}

impl MemoryAccountStore {
    /// Create an empty account store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl std::fmt::Debug for MemoryAccountStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = lock(&self.inner);
        f.debug_struct("MemoryAccountStore")
            .field("accounts", &inner.accounts.len())
            .finish()
    }
}

#[async_trait]
impl AccountStore for MemoryAccountStore {
    async fn create(&self, account: NewAccount) -> Result<User, RepositoryError> {
        let mut inner = lock(&self.inner);

        // Same signal the unique index produces in PostgreSQL.
        if inner
            .accounts
            .values()
            .any(|(user, _)| user.email == account.email)
        {
            return Err(RepositoryError::Conflict("email already exists".to_owned()));
        }

        inner.next_id += 1;
        let now = Utc::now();
        let user = User {
            id: UserId::new(inner.next_id),
            email: account.email,
            created_at: now,
            updated_at: now,
        };

        inner
            .accounts
            .insert(user.id.as_i32(), (user.clone(), account.password_hash));

        Ok(user)
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError> {
        let inner = lock(&self.inner);
        Ok(inner.accounts.get(&id.as_i32()).map(|(user, _)| user.clone()))
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, RepositoryError> {
        let inner = lock(&self.inner);
        Ok(inner
            .accounts
            .values()
            .find(|(user, _)| &user.email == email)
            .map(|(user, _)| user.clone()))
    }

    async fn find_credentials(
        &self,
        email: &Email,
    ) -> Result<Option<(User, String)>, RepositoryError> {
        let inner = lock(&self.inner);
        Ok(inner
            .accounts
            .values()
            .find(|(user, _)| &user.email == email)
            .cloned())
    }

    async fn delete(&self, id: UserId) -> Result<bool, RepositoryError> {
        let mut inner = lock(&self.inner);
        let removed = inner.accounts.remove(&id.as_i32()).is_some();
        if removed {
            // Mirror the ON DELETE CASCADE on sessions.user_id.
            inner.sessions.retain(|_, owner| *owner != id);
        }
        Ok(removed)
    }
}

/// In-memory implementation of [`SessionStore`].
///
/// Shares its backing store with the [`MemoryAccountStore`] it was built
/// from, so token resolution performs the same join the `PostgreSQL`
/// adapter does and account deletion cascades into the session rows.
pub struct MemorySessionStore {
    inner: Arc<Mutex<MemoryInner>>,
}

impl MemorySessionStore {
    /// Create a session store over the same backing store as `accounts`.
    #[must_use]
    pub fn new(accounts: Arc<MemoryAccountStore>) -> Self {
        Self {
            inner: Arc::clone(&accounts.inner),
        }
    }
}

impl std::fmt::Debug for MemorySessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = lock(&self.inner);
        f.debug_struct("MemorySessionStore")
            .field("sessions", &inner.sessions.len())
            .finish()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn insert(&self, token: &SessionToken, user_id: UserId) -> Result<(), RepositoryError> {
        let mut inner = lock(&self.inner);
        if inner.sessions.contains_key(token.as_str()) {
            return Err(RepositoryError::Conflict(
                "session token already exists".to_owned(),
            ));
        }
        inner.sessions.insert(token.as_str().to_owned(), user_id);
        Ok(())
    }

    async fn find_user_by_token(
        &self,
        token: &SessionToken,
    ) -> Result<Option<User>, RepositoryError> {
        let inner = lock(&self.inner);
        Ok(inner
            .sessions
            .get(token.as_str())
            .and_then(|user_id| inner.accounts.get(&user_id.as_i32()))
            .map(|(user, _)| user.clone()))
    }

    async fn delete_by_token(&self, token: &SessionToken) -> Result<u64, RepositoryError> {
        let mut inner = lock(&self.inner);
        Ok(u64::from(inner.sessions.remove(token.as_str()).is_some()))
    }
}
