//! Email address value object
//!
//! Account identifiers handed to the identity provider are e-mail addresses.
//! They are trimmed and lowercased so that `Ops@Rail.example` and
//! `ops@rail.example` name the same account.
//!
//! # Examples
//!
//! ```
//! use domain::EmailAddress;
//!
//! let email = EmailAddress::new(" Controller@Rail.Example ").unwrap();
//! assert_eq!(email.as_str(), "controller@rail.example");
//! assert_eq!(email.local_part(), "controller");
//!
//! assert!(EmailAddress::new("controller").is_err());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::DomainError;

/// A validated, normalized email address
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress {
    #[validate(email)]
    value: String,
}

impl EmailAddress {
    /// Create a new email address, validating the format
    pub fn new(email: impl Into<String>) -> Result<Self, DomainError> {
        let value = email.into().trim().to_lowercase();

        let candidate = Self { value };
        candidate
            .validate()
            .map_err(|e| DomainError::InvalidEmailAddress(e.to_string()))?;

        Ok(candidate)
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Part before the `@`
    pub fn local_part(&self) -> &str {
        self.value.split('@').next().unwrap_or_default()
    }

    /// Part after the `@`
    pub fn domain(&self) -> &str {
        self.value.split('@').nth(1).unwrap_or_default()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for EmailAddress {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<EmailAddress> for String {
    fn from(email: EmailAddress) -> Self {
        email.value
    }
}
