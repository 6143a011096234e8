//! Credential validation.
//!
//! Pure functions over the raw credential strings. Each check appends a
//! [`FieldError`] instead of short-circuiting, so a caller presenting a
//! registration form gets every problem in one pass.

use serde::Serialize;

use quizmill_core::Email;

/// Minimum password length for registration.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// A validation failure tied to a specific credential field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Field the error applies to (`"email"` or `"password"`).
    pub field: &'static str,
    /// Human-readable description of the failure.
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Validate credentials for registration.
///
/// Empty result means the credentials are acceptable.
#[must_use]
pub fn registration(email: &str, password: &str) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if let Err(e) = Email::parse(email) {
        errors.push(FieldError::new("email", e.to_string()));
    }

    if password.is_empty() {
        errors.push(FieldError::new("password", "password must not be empty"));
    } else if password.chars().count() < MIN_PASSWORD_LENGTH {
        errors.push(FieldError::new(
            "password",
            format!("password must be at least {MIN_PASSWORD_LENGTH} characters"),
        ));
    }

    errors
}

/// Validate credentials for login.
///
/// Only shape and presence are checked here. The length policy applies at
/// registration time; rejecting short passwords at login would lock out
/// accounts created before a policy change.
#[must_use]
pub fn login(email: &str, password: &str) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if let Err(e) = Email::parse(email) {
        errors.push(FieldError::new("email", e.to_string()));
    }

    if password.is_empty() {
        errors.push(FieldError::new("password", "password must not be empty"));
    }

    errors
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_valid() {
        assert!(registration("player@example.com", "correct horse").is_empty());
    }

    #[test]
    fn test_registration_collects_all_errors() {
        let errors = registration("not-an-email", "short");
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].field, "email");
        assert_eq!(errors[1].field, "password");
    }

    #[test]
    fn test_registration_rejects_short_password() {
        let errors = registration("player@example.com", "1234567");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "password");
        assert!(errors[0].message.contains("at least 8"));
    }

    #[test]
    fn test_registration_counts_characters_not_bytes() {
        // 8 multi-byte characters pass the length check.
        assert!(registration("player@example.com", "pässwörd").is_empty());
    }

    #[test]
    fn test_registration_empty_password() {
        let errors = registration("player@example.com", "");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "password must not be empty");
    }

    #[test]
    fn test_login_accepts_short_password() {
        // Pre-policy accounts may have short passwords; login only checks presence.
        assert!(login("player@example.com", "abc").is_empty());
    }

    #[test]
    fn test_login_rejects_malformed_email() {
        let errors = login("no-at-sign", "password");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "email");
    }

    #[test]
    fn test_field_error_serializes() {
        let error = FieldError::new("email", "must contain '@'");
        let json = serde_json::to_value(&error).unwrap();
        assert_eq!(json["field"], "email");
        assert_eq!(json["message"], "must contain '@'");
    }
}
