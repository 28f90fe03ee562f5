//! Identity provider configuration: secret policy and seeded accounts.

use serde::{Deserialize, Serialize};

/// A pre-registered dashboard account
///
/// Secrets must be pre-hashed using Argon2id format (PHC string).
///
/// Example in config.toml:
/// ```toml
/// [[auth.accounts]]
/// email = "controller@rail.example"
/// password_hash = "$argon2id$v=19$m=19456,t=2,p=1$..."
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountEntry {
    pub email: String,

    /// Argon2id hash of the account secret in PHC format
    pub password_hash: String,
}

/// Identity provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Shortest secret accepted at sign-up
    #[serde(default = "default_min_secret_len")]
    pub min_secret_len: usize,

    /// Capacity of the session event channel
    #[serde(default = "default_event_capacity")]
    pub event_capacity: usize,

    /// Domain appended to sign-in identifiers typed without an `@`
    #[serde(default = "default_identifier_domain")]
    pub identifier_domain: Option<String>,

    /// Accounts registered at startup
    #[serde(default)]
    pub accounts: Vec<AccountEntry>,
}

const fn default_min_secret_len() -> usize {
    6
}

const fn default_event_capacity() -> usize {
    64
}

#[allow(clippy::unnecessary_wraps)]
fn default_identifier_domain() -> Option<String> {
    Some("gmail.com".to_string())
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            min_secret_len: default_min_secret_len(),
            event_capacity: default_event_capacity(),
            identifier_domain: default_identifier_domain(),
            accounts: Vec::new(),
        }
    }
}
