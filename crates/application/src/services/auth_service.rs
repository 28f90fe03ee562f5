//! Auth Service - Thin layer over the identity provider
//!
//! Parses the raw identifier typed into the sign-in form, forwards to the
//! provider and logs the outcome. Secrets pass through untouched.
//!
//! With an identifier domain configured, a bare user ID such as `controller`
//! signs in as `controller@<domain>`.

use std::sync::Arc;

use domain::{EmailAddress, Session, SessionToken};
use secrecy::SecretString;
use tokio::sync::broadcast;
use tracing::{debug, info, instrument, warn};

use crate::{
    error::AuthError,
    ports::{IdentityProviderPort, SessionEvent},
};

/// Service for signing dashboard users in and out
pub struct AuthService {
    provider: Arc<dyn IdentityProviderPort>,
    identifier_domain: Option<String>,
}

impl std::fmt::Debug for AuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService")
            .field("identifier_domain", &self.identifier_domain)
            .finish_non_exhaustive()
    }
}

impl AuthService {
    pub fn new(provider: Arc<dyn IdentityProviderPort>) -> Self {
        Self {
            provider,
            identifier_domain: None,
        }
    }

    /// Append `@domain` to identifiers typed without one
    #[must_use]
    pub fn with_identifier_domain(mut self, domain: impl Into<String>) -> Self {
        self.identifier_domain = Some(domain.into());
        self
    }

    fn parse_identifier(&self, raw: &str) -> Result<EmailAddress, AuthError> {
        let raw = raw.trim();
        let parsed = match &self.identifier_domain {
            Some(domain) if !raw.is_empty() && !raw.contains('@') => {
                EmailAddress::new(&format!("{raw}@{domain}"))
            },
            _ => EmailAddress::new(raw),
        };
        parsed.map_err(|e| AuthError::InvalidIdentifier(e.to_string()))
    }

    /// Sign in with an e-mail address and password
    #[instrument(skip(self, secret))]
    pub async fn login(&self, email: &str, secret: &SecretString) -> Result<Session, AuthError> {
        let email = self.parse_identifier(email)?;
        match self.provider.login(&email, secret).await {
            Ok(session) => {
                info!(user_id = %session.user_id, "User signed in");
                Ok(session)
            },
            Err(e) => {
                warn!(error = %e, "Sign-in rejected");
                Err(e)
            },
        }
    }

    /// Create an account and sign it in
    #[instrument(skip(self, secret))]
    pub async fn signup(&self, email: &str, secret: &SecretString) -> Result<Session, AuthError> {
        let email = self.parse_identifier(email)?;
        match self.provider.signup(&email, secret).await {
            Ok(session) => {
                info!(user_id = %session.user_id, "Account created");
                Ok(session)
            },
            Err(e) => {
                warn!(error = %e, "Sign-up rejected");
                Err(e)
            },
        }
    }

    #[instrument(skip(self, token))]
    pub async fn logout(&self, token: &SessionToken) -> Result<(), AuthError> {
        self.provider.logout(token).await?;
        debug!("Session closed");
        Ok(())
    }

    /// Session for a token, or `None` if it was never issued or has ended
    pub async fn current_session(&self, token: &SessionToken) -> Result<Option<Session>, AuthError> {
        self.provider.current_session(token).await
    }

    /// Stream of sign-in and sign-out events
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.provider.subscribe()
    }
}
