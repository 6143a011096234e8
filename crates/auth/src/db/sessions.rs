//! Session store backed by `PostgreSQL`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use quizmill_core::{Email, SessionToken, UserId};

use super::RepositoryError;
use crate::models::User;
use crate::store::SessionStore;

/// `PostgreSQL` implementation of [`SessionStore`].
#[derive(Debug, Clone)]
pub struct PgSessionStore {
    pool: PgPool,
}

impl PgSessionStore {
    /// Create a new session store over a connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct SessionUserRow {
    id: i32,
    email: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[async_trait]
impl SessionStore for PgSessionStore {
    async fn insert(&self, token: &SessionToken, user_id: UserId) -> Result<(), RepositoryError> {
        sqlx::query(
            r"
            INSERT INTO sessions (token, user_id)
            VALUES ($1, $2)
            ",
        )
        .bind(token.as_str())
        .bind(user_id.as_i32())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                // Token collision; entropy makes this negligible but the
                // primary key is the backstop.
                return RepositoryError::Conflict("session token already exists".to_owned());
            }
            RepositoryError::Database(e)
        })?;

        Ok(())
    }

    async fn find_user_by_token(
        &self,
        token: &SessionToken,
    ) -> Result<Option<User>, RepositoryError> {
        let row = sqlx::query_as::<_, SessionUserRow>(
            r"
            SELECT u.id, u.email, u.created_at, u.updated_at
            FROM sessions s
            JOIN users u ON s.user_id = u.id
            WHERE s.token = $1
            ",
        )
        .bind(token.as_str())
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(r) => {
                let email = Email::parse(&r.email).map_err(|e| {
                    RepositoryError::DataCorruption(format!("invalid email in database: {e}"))
                })?;

                Ok(Some(User {
                    id: UserId::new(r.id),
                    email,
                    created_at: r.created_at,
                    updated_at: r.updated_at,
                }))
            }
            None => Ok(None),
        }
    }

    async fn delete_by_token(&self, token: &SessionToken) -> Result<u64, RepositoryError> {
        let result = sqlx::query(
            r"
            DELETE FROM sessions
            WHERE token = $1
            ",
        )
        .bind(token.as_str())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}
