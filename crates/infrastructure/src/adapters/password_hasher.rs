//! Account secret hashing using Argon2id
//!
//! Secrets are stored as self-describing PHC strings, so seeded accounts in
//! `config.toml` and accounts created at sign-up share one format.
//!
//! # Examples
//!
//! ```
//! use infrastructure::adapters::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("signal-box").unwrap();
//!
//! assert!(hasher.verify("signal-box", &hash).unwrap());
//! assert!(!hasher.verify("points-failure", &hash).unwrap());
//! ```

use argon2::{
    Argon2, PasswordHash, PasswordHasher as ArgonPasswordHasher, PasswordVerifier,
    password_hash::{SaltString, rand_core::OsRng},
};
use thiserror::Error;
use tracing::{debug, instrument};

/// Errors that can occur while hashing or checking a secret
#[derive(Debug, Error)]
pub enum PasswordHashError {
    /// Failed to hash the secret
    #[error("Failed to hash secret: {0}")]
    HashingFailed(String),

    /// Stored hash is not a PHC string
    #[error("Invalid hash format: {0}")]
    InvalidHashFormat(String),
}

/// Argon2id hasher with the crate's default parameters
/// (19 MiB memory, 2 iterations, parallelism 1)
#[derive(Debug, Clone, Copy, Default)]
pub struct PasswordHasher;

impl PasswordHasher {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Hash a secret into a PHC-formatted string
    ///
    /// # Errors
    ///
    /// Returns `PasswordHashError::HashingFailed` if hashing fails.
    #[instrument(skip(self, secret))]
    pub fn hash(&self, secret: &str) -> Result<String, PasswordHashError> {
        let salt = SaltString::generate(&mut OsRng);

        let hash = Argon2::default()
            .hash_password(secret.as_bytes(), &salt)
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

        debug!("Hashed account secret");
        Ok(hash.to_string())
    }

    /// Check a secret against a stored hash
    ///
    /// # Errors
    ///
    /// Returns `PasswordHashError::InvalidHashFormat` if `hash` does not parse.
    #[instrument(skip(self, secret, hash))]
    pub fn verify(&self, secret: &str, hash: &str) -> Result<bool, PasswordHashError> {
        let parsed = PasswordHash::new(hash)
            .map_err(|e| PasswordHashError::InvalidHashFormat(e.to_string()))?;

        let matches = Argon2::default()
            .verify_password(secret.as_bytes(), &parsed)
            .is_ok();

        debug!(matches, "Checked account secret");
        Ok(matches)
    }

    /// Whether a string looks like an argon2 PHC hash
    ///
    /// ```
    /// use infrastructure::adapters::PasswordHasher;
    ///
    /// assert!(PasswordHasher::is_hashed("$argon2id$v=19$m=19456,t=2,p=1$..."));
    /// assert!(!PasswordHasher::is_hashed("hunter2"));
    /// ```
    #[must_use]
    pub fn is_hashed(value: &str) -> bool {
        value.starts_with("$argon2")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_creates_valid_phc_format() {
        let hash = PasswordHasher::new().hash("secret1").unwrap();

        assert!(hash.starts_with("$argon2id"));
        assert!(hash.contains("$v="));
        assert!(PasswordHasher::is_hashed(&hash));
    }

    #[test]
    fn verify_matches_only_original_secret() {
        let hasher = PasswordHasher::new();
        let hash = hasher.hash("secret1").unwrap();

        assert!(hasher.verify("secret1", &hash).unwrap());
        assert!(!hasher.verify("secret2", &hash).unwrap());
    }

    #[test]
    fn verify_invalid_hash_returns_error() {
        let result = PasswordHasher::new().verify("secret1", "plaintext");
        assert!(matches!(result, Err(PasswordHashError::InvalidHashFormat(_))));
    }

    #[test]
    fn same_secret_gets_fresh_salt() {
        let hasher = PasswordHasher::new();
        let first = hasher.hash("secret1").unwrap();
        let second = hasher.hash("secret1").unwrap();

        assert_ne!(first, second);
        assert!(hasher.verify("secret1", &second).unwrap());
    }

    #[test]
    fn is_hashed_rejects_plaintext() {
        assert!(!PasswordHasher::is_hashed("secret1"));
        assert!(!PasswordHasher::is_hashed(""));
    }
}
