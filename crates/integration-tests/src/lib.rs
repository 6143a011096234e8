//! Integration tests for Quizmill.
//!
//! The tests in `tests/` exercise the auth service end to end against the
//! in-memory store adapters, which enforce the same contract as the
//! `PostgreSQL` adapters (email uniqueness, token-keyed sessions, cascade
//! on account deletion). No database is required.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p quizmill-integration-tests
//! ```

use std::sync::Arc;

use quizmill_auth::config::HasherConfig;
use quizmill_auth::db::memory::{MemoryAccountStore, MemorySessionStore};
use quizmill_auth::services::auth::{AuthService, Hasher};

/// Build an auth service over fresh in-memory stores.
///
/// Uses a low-cost hashing profile so the suite stays fast; the hashing
/// behavior under test (salting, PHC parameters, verification) is the same
/// at any cost.
///
/// # Panics
///
/// Panics if the hasher rejects the test parameters, which only happens if
/// the profile below is made invalid.
#[must_use]
pub fn test_service() -> AuthService<MemoryAccountStore, MemorySessionStore> {
    let accounts = Arc::new(MemoryAccountStore::new());
    let sessions = Arc::new(MemorySessionStore::new(Arc::clone(&accounts)));

    #[allow(clippy::unwrap_used)]
    let hasher = Hasher::new(HasherConfig {
        memory_kib: 1024,
        iterations: 1,
        parallelism: 1,
    })
    .unwrap();

    AuthService::new(accounts, sessions, hasher)
}
