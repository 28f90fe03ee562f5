//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Identity provider rejected the request
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// External service error
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Failures reported by the identity provider
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The account exists but the secret does not match
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// No account is registered for the identifier
    #[error("Unknown account")]
    UnknownAccount,

    /// Sign-up for an identifier that is already registered
    #[error("Account already exists")]
    AccountExists,

    /// The identifier is not a valid e-mail address
    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    /// The secret is shorter than the provider accepts
    #[error("Secret must be at least {min_len} characters")]
    WeakSecret { min_len: usize },

    /// The provider itself failed
    #[error("Identity provider error: {0}")]
    Provider(String),
}

impl AuthError {
    /// Message shown on the sign-in form
    ///
    /// Only a wrong password is called out; every other failure gets the same
    /// generic refusal.
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "wrong password",
            _ => "Authorised for Admins only",
        }
    }
}
