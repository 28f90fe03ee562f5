//! In-memory identity provider - Implements IdentityProviderPort
//!
//! Accounts and sessions live in process memory and vanish on restart.
//! Secrets are only ever held as argon2 hashes. Hashing and verification
//! run on the blocking pool.

use std::collections::HashMap;

use application::{
    error::AuthError,
    ports::{IdentityProviderPort, SessionEvent},
};
use async_trait::async_trait;
use domain::{EmailAddress, Session, SessionToken, UserId};
use parking_lot::RwLock;
use secrecy::{ExposeSecret, SecretString};
use tokio::sync::broadcast;
use tracing::{debug, info, instrument};

use super::PasswordHasher;
use crate::config::AuthConfig;

#[derive(Debug, Clone)]
struct Account {
    user_id: UserId,
    password_hash: String,
}

/// Identity provider holding accounts and sessions in memory
pub struct InMemoryIdentityProvider {
    hasher: PasswordHasher,
    min_secret_len: usize,
    accounts: RwLock<HashMap<EmailAddress, Account>>,
    sessions: RwLock<HashMap<SessionToken, Session>>,
    events: broadcast::Sender<SessionEvent>,
}

impl std::fmt::Debug for InMemoryIdentityProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryIdentityProvider")
            .field("min_secret_len", &self.min_secret_len)
            .field("accounts", &self.accounts.read().len())
            .field("sessions", &self.sessions.read().len())
            .finish_non_exhaustive()
    }
}

impl InMemoryIdentityProvider {
    /// Create an empty provider
    pub fn new(min_secret_len: usize, event_capacity: usize) -> Self {
        let (events, _) = broadcast::channel(event_capacity.max(1));
        Self {
            hasher: PasswordHasher::new(),
            min_secret_len,
            accounts: RwLock::new(HashMap::new()),
            sessions: RwLock::new(HashMap::new()),
            events,
        }
    }

    /// Create a provider with the configured policy and seeded accounts
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidIdentifier` for a seeded account whose
    /// e-mail does not parse and `AuthError::Provider` for one without an
    /// argon2 hash.
    pub fn from_config(config: &AuthConfig) -> Result<Self, AuthError> {
        let provider = Self::new(config.min_secret_len, config.event_capacity);
        for entry in &config.accounts {
            let email = EmailAddress::new(&entry.email)
                .map_err(|e| AuthError::InvalidIdentifier(e.to_string()))?;
            provider.insert_hashed(email, entry.password_hash.clone())?;
        }
        info!(accounts = provider.account_count(), "Identity provider ready");
        Ok(provider)
    }

    /// Register an account from an existing PHC hash
    pub fn insert_hashed(
        &self,
        email: EmailAddress,
        password_hash: String,
    ) -> Result<UserId, AuthError> {
        if !PasswordHasher::is_hashed(&password_hash) {
            return Err(AuthError::Provider(format!(
                "account {email} has no argon2 hash"
            )));
        }

        let user_id = UserId::new();
        let mut accounts = self.accounts.write();
        if accounts.contains_key(&email) {
            return Err(AuthError::AccountExists);
        }
        accounts.insert(
            email,
            Account {
                user_id,
                password_hash,
            },
        );
        Ok(user_id)
    }

    /// Number of registered accounts
    pub fn account_count(&self) -> usize {
        self.accounts.read().len()
    }

    async fn hash_secret(&self, secret: &SecretString) -> Result<String, AuthError> {
        let hasher = self.hasher;
        let secret = SecretString::from(secret.expose_secret().to_owned());
        tokio::task::spawn_blocking(move || hasher.hash(secret.expose_secret()))
            .await
            .map_err(|e| AuthError::Provider(format!("Task join error: {e}")))?
            .map_err(|e| AuthError::Provider(e.to_string()))
    }

    async fn verify_secret(&self, secret: &SecretString, hash: String) -> Result<bool, AuthError> {
        let hasher = self.hasher;
        let secret = SecretString::from(secret.expose_secret().to_owned());
        tokio::task::spawn_blocking(move || hasher.verify(secret.expose_secret(), &hash))
            .await
            .map_err(|e| AuthError::Provider(format!("Task join error: {e}")))?
            .map_err(|e| AuthError::Provider(e.to_string()))
    }

    fn open_session(&self, user_id: UserId, email: &EmailAddress) -> Session {
        let session = Session::open(user_id, email.clone());
        self.sessions
            .write()
            .insert(session.token.clone(), session.clone());
        self.publish(SessionEvent::SignedIn {
            user_id,
            email: email.clone(),
        });
        session
    }

    fn publish(&self, event: SessionEvent) {
        if self.events.send(event).is_err() {
            debug!("No session event subscribers");
        }
    }
}

#[async_trait]
impl IdentityProviderPort for InMemoryIdentityProvider {
    #[instrument(skip(self, secret), fields(email = %email))]
    async fn login(&self, email: &EmailAddress, secret: &SecretString) -> Result<Session, AuthError> {
        let account = self
            .accounts
            .read()
            .get(email)
            .cloned()
            .ok_or(AuthError::UnknownAccount)?;

        if !self.verify_secret(secret, account.password_hash).await? {
            return Err(AuthError::InvalidCredentials);
        }

        Ok(self.open_session(account.user_id, email))
    }

    #[instrument(skip(self, secret), fields(email = %email))]
    async fn signup(&self, email: &EmailAddress, secret: &SecretString) -> Result<Session, AuthError> {
        if secret.expose_secret().chars().count() < self.min_secret_len {
            return Err(AuthError::WeakSecret {
                min_len: self.min_secret_len,
            });
        }
        if self.accounts.read().contains_key(email) {
            return Err(AuthError::AccountExists);
        }

        let hash = self.hash_secret(secret).await?;
        let user_id = self.insert_hashed(email.clone(), hash)?;

        Ok(self.open_session(user_id, email))
    }

    #[instrument(skip(self, token))]
    async fn logout(&self, token: &SessionToken) -> Result<(), AuthError> {
        let removed = self.sessions.write().remove(token);
        if let Some(session) = removed {
            self.publish(SessionEvent::SignedOut {
                user_id: session.user_id,
                email: session.email,
            });
        }
        Ok(())
    }

    async fn current_session(&self, token: &SessionToken) -> Result<Option<Session>, AuthError> {
        Ok(self.sessions.read().get(token).cloned())
    }

    fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }
}
