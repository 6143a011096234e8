//! Authentication error types.

use thiserror::Error;

use crate::db::RepositoryError;

use super::password::HasherError;
use super::validate::FieldError;

/// Errors that can occur during authentication operations.
///
/// The first four variants are expected domain outcomes that the caller maps
/// to client-facing responses. `Hashing` and `Store` are operational: they
/// mean the operation could not be carried out, not that the input was bad.
#[derive(Debug, Error)]
pub enum AuthError {
    /// One or more credential fields failed validation.
    #[error("validation failed")]
    Validation(Vec<FieldError>),

    /// An account with this email already exists.
    #[error("an account with this email already exists")]
    DuplicateAccount,

    /// The email/password pair did not match an account.
    ///
    /// Deliberately carries no detail: the caller cannot tell an unknown
    /// email from a wrong password.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// The session token did not match an active session.
    #[error("invalid session")]
    InvalidSession,

    /// Password hashing failed.
    #[error(transparent)]
    Hashing(#[from] HasherError),

    /// Store operation failed.
    #[error(transparent)]
    Store(#[from] RepositoryError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_credentials_message_is_uniform() {
        // The message must not hint at which half of the pair was wrong.
        let err = AuthError::InvalidCredentials;
        assert_eq!(err.to_string(), "invalid email or password");
    }
}
