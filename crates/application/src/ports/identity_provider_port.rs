//! Identity provider port
//!
//! Credential checks are delegated entirely to the provider; the dashboard
//! never sees stored secrets.

use async_trait::async_trait;
use domain::{EmailAddress, Session, SessionToken, UserId};
#[cfg(test)]
use mockall::automock;
use secrecy::SecretString;
use serde::Serialize;
use tokio::sync::broadcast;

use crate::error::AuthError;

/// Change in the set of signed-in sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SessionEvent {
    SignedIn {
        user_id: UserId,
        email: EmailAddress,
    },
    SignedOut {
        user_id: UserId,
        email: EmailAddress,
    },
}

/// Port for account and session operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait IdentityProviderPort: Send + Sync {
    /// Sign in to an existing account
    async fn login(
        &self,
        email: &EmailAddress,
        secret: &SecretString,
    ) -> Result<Session, AuthError>;

    /// Register a new account and sign it in
    async fn signup(
        &self,
        email: &EmailAddress,
        secret: &SecretString,
    ) -> Result<Session, AuthError>;

    /// End a session; unknown tokens are ignored
    async fn logout(&self, token: &SessionToken) -> Result<(), AuthError>;

    /// Session for a token, if it is still signed in
    async fn current_session(&self, token: &SessionToken) -> Result<Option<Session>, AuthError>;

    /// Receive a notification for every sign-in and sign-out
    fn subscribe(&self) -> broadcast::Receiver<SessionEvent>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn IdentityProviderPort>();
    }

    #[test]
    fn session_event_serializes_with_tag() {
        let event = SessionEvent::SignedOut {
            user_id: UserId::new(),
            email: EmailAddress::new("ops@rail.example").unwrap(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "signed_out");
        assert_eq!(json["email"], "ops@rail.example");
    }
}
