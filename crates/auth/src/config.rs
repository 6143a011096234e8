//! Auth subsystem configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `QUIZMILL_DATABASE_URL` - `PostgreSQL` connection string (falls back to
//!   `DATABASE_URL`)
//!
//! ## Optional
//! - `QUIZMILL_ARGON2_MEMORY_KIB` - Argon2id memory cost in KiB (default: 19456)
//! - `QUIZMILL_ARGON2_ITERATIONS` - Argon2id time cost (default: 2)
//! - `QUIZMILL_ARGON2_PARALLELISM` - Argon2id lanes (default: 1)

use secrecy::SecretString;
use thiserror::Error;

/// Default Argon2id memory cost in KiB (the OWASP-recommended 19 MiB profile).
pub const DEFAULT_ARGON2_MEMORY_KIB: u32 = 19_456;
/// Default Argon2id time cost.
pub const DEFAULT_ARGON2_ITERATIONS: u32 = 2;
/// Default Argon2id parallelism.
pub const DEFAULT_ARGON2_PARALLELISM: u32 = 1;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Auth subsystem configuration.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// `PostgreSQL` database connection URL (contains password)
    pub database_url: SecretString,
    /// Password hashing work factor
    pub hasher: HasherConfig,
}

/// Argon2id work-factor parameters.
///
/// These are configuration constants, not hidden defaults: raising the cost
/// only affects hashes created after the change, existing hashes keep the
/// parameters recorded in their PHC string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HasherConfig {
    /// Memory cost in KiB
    pub memory_kib: u32,
    /// Time cost (number of passes)
    pub iterations: u32,
    /// Degree of parallelism (lanes)
    pub parallelism: u32,
}

impl Default for HasherConfig {
    fn default() -> Self {
        Self {
            memory_kib: DEFAULT_ARGON2_MEMORY_KIB,
            iterations: DEFAULT_ARGON2_ITERATIONS,
            parallelism: DEFAULT_ARGON2_PARALLELISM,
        }
    }
}

impl AuthConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let database_url = get_database_url("QUIZMILL_DATABASE_URL")?;
        let hasher = HasherConfig::from_env()?;

        Ok(Self {
            database_url,
            hasher,
        })
    }
}

impl HasherConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            memory_kib: get_parsed_or_default(
                "QUIZMILL_ARGON2_MEMORY_KIB",
                DEFAULT_ARGON2_MEMORY_KIB,
            )?,
            iterations: get_parsed_or_default(
                "QUIZMILL_ARGON2_ITERATIONS",
                DEFAULT_ARGON2_ITERATIONS,
            )?,
            parallelism: get_parsed_or_default(
                "QUIZMILL_ARGON2_PARALLELISM",
                DEFAULT_ARGON2_PARALLELISM,
            )?,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get database URL with fallback to generic `DATABASE_URL`.
fn get_database_url(primary_key: &str) -> Result<SecretString, ConfigError> {
    if let Ok(value) = std::env::var(primary_key) {
        return Ok(SecretString::from(value));
    }
    if let Ok(value) = std::env::var("DATABASE_URL") {
        return Ok(SecretString::from(value));
    }
    Err(ConfigError::MissingEnvVar(primary_key.to_string()))
}

/// Get an environment variable parsed as `T`, with a default when unset.
fn get_parsed_or_default<T: std::str::FromStr>(key: &str, default: T) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(value) => value
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string())),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_hasher_config_defaults() {
        let config = HasherConfig::default();
        assert_eq!(config.memory_kib, 19_456);
        assert_eq!(config.iterations, 2);
        assert_eq!(config.parallelism, 1);
    }

    #[test]
    fn test_get_parsed_or_default_unset() {
        let value: u32 = get_parsed_or_default("QUIZMILL_TEST_UNSET_VAR", 42).unwrap();
        assert_eq!(value, 42);
    }

    #[test]
    #[allow(unsafe_code)]
    fn test_get_parsed_or_default_invalid() {
        // Env mutation is process-global, so use a key no other test touches.
        unsafe { std::env::set_var("QUIZMILL_TEST_INVALID_U32", "not-a-number") };
        let result: Result<u32, _> = get_parsed_or_default("QUIZMILL_TEST_INVALID_U32", 0);
        assert!(matches!(result, Err(ConfigError::InvalidEnvVar(_, _))));
        unsafe { std::env::remove_var("QUIZMILL_TEST_INVALID_U32") };
    }

    #[test]
    fn test_config_error_display_names_variable() {
        let err = ConfigError::MissingEnvVar("QUIZMILL_DATABASE_URL".to_string());
        assert_eq!(
            err.to_string(),
            "Missing environment variable: QUIZMILL_DATABASE_URL"
        );
    }
}
