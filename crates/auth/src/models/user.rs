//! User domain types.
//!
//! These types represent validated domain objects separate from database row
//! types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use quizmill_core::{Email, UserId};

/// A Quizmill player account (domain type).
///
/// This is the secret-excluding projection of an account: the password hash
/// never leaves the store layer inside this type, so a `User` is always safe
/// to serialize toward a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user ID, assigned by the store.
    pub id: UserId,
    /// User's email address.
    pub email: Email,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
    /// When the account was last updated.
    pub updated_at: DateTime<Utc>,
}
