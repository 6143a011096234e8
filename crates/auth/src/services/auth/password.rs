//! Password hashing with Argon2id.
//!
//! Hashes are PHC strings carrying their own salt and work-factor
//! parameters, so verification always uses the parameters the hash was
//! created with. Changing [`HasherConfig`] only affects new hashes.

use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use thiserror::Error;

use crate::config::HasherConfig;

/// Password hashing failed.
///
/// Only `hash` produces this; `verify` swallows internal errors and reports
/// a non-match instead, so a corrupt stored hash cannot be distinguished
/// from a wrong password by the caller.
#[derive(Debug, Error)]
#[error("password hashing failed: {0}")]
pub struct HasherError(String);

/// Argon2id password hasher.
///
/// Construct once and share; the instance precomputes a baseline hash used
/// by [`Hasher::dummy_verify`] to equalize the cost of login attempts
/// against nonexistent accounts.
pub struct Hasher {
    argon2: Argon2<'static>,
    baseline: String,
}

impl Hasher {
    /// Build a hasher with the given work factor.
    ///
    /// # Errors
    ///
    /// Returns `HasherError` if the parameters are rejected by the
    /// algorithm (e.g. memory cost below the Argon2 minimum).
    pub fn new(config: HasherConfig) -> Result<Self, HasherError> {
        let params = Params::new(
            config.memory_kib,
            config.iterations,
            config.parallelism,
            None,
        )
        .map_err(|e| HasherError(e.to_string()))?;
        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

        // Any fixed input works; only the verification cost matters.
        let baseline = hash_with(&argon2, "quizmill-baseline")?;

        Ok(Self { argon2, baseline })
    }

    /// Hash a plaintext password with a freshly generated random salt.
    ///
    /// # Errors
    ///
    /// Returns `HasherError` if hashing fails internally.
    pub fn hash(&self, password: &str) -> Result<String, HasherError> {
        hash_with(&self.argon2, password)
    }

    /// Verify a plaintext password against a stored PHC hash string.
    ///
    /// Any internal failure, including an unparseable hash, is a non-match.
    #[must_use]
    pub fn verify(&self, password: &str, hash: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(hash) else {
            return false;
        };
        self.argon2
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    }

    /// Burn one verification's worth of work against the baseline hash.
    ///
    /// Called on the login path when no account matches the email, so that
    /// the unknown-email and wrong-password failures take comparable time.
    pub fn dummy_verify(&self, password: &str) {
        let _ = self.verify(password, &self.baseline);
    }
}

impl std::fmt::Debug for Hasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Hasher").finish_non_exhaustive()
    }
}

fn hash_with(argon2: &Argon2<'_>, password: &str) -> Result<String, HasherError> {
    let salt = SaltString::generate(&mut OsRng);
    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| HasherError(e.to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    /// Low-cost parameters so the test suite stays fast.
    fn test_hasher() -> Hasher {
        Hasher::new(HasherConfig {
            memory_kib: 1024,
            iterations: 1,
            parallelism: 1,
        })
        .unwrap()
    }

    #[test]
    fn test_hash_then_verify() {
        let hasher = test_hasher();
        let hash = hasher.hash("hunter22").unwrap();
        assert!(hasher.verify("hunter22", &hash));
    }

    #[test]
    fn test_wrong_password_does_not_verify() {
        let hasher = test_hasher();
        let hash = hasher.hash("hunter22").unwrap();
        assert!(!hasher.verify("hunter23", &hash));
    }

    #[test]
    fn test_malformed_hash_is_a_non_match() {
        let hasher = test_hasher();
        assert!(!hasher.verify("hunter22", "not-a-phc-string"));
        assert!(!hasher.verify("hunter22", ""));
    }

    #[test]
    fn test_salts_are_random() {
        let hasher = test_hasher();
        let a = hasher.hash("hunter22").unwrap();
        let b = hasher.hash("hunter22").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_hash_records_work_factor() {
        let hasher = test_hasher();
        let hash = hasher.hash("hunter22").unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(hash.contains("m=1024,t=1,p=1"));
    }

    #[test]
    fn test_verify_honors_parameters_in_hash() {
        // A hash created with one work factor verifies under a hasher
        // configured with another.
        let hash = test_hasher().hash("hunter22").unwrap();
        let other = Hasher::new(HasherConfig {
            memory_kib: 2048,
            iterations: 2,
            parallelism: 1,
        })
        .unwrap();
        assert!(other.verify("hunter22", &hash));
    }

    #[test]
    fn test_rejects_impossible_parameters() {
        let result = Hasher::new(HasherConfig {
            memory_kib: 1,
            iterations: 0,
            parallelism: 0,
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_dummy_verify_does_not_panic() {
        test_hasher().dummy_verify("anything");
    }
}
