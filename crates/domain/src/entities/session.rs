//! Session entity - a signed-in dashboard account

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{EmailAddress, SessionToken, UserId};

/// An authenticated session issued by the identity provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: SessionToken,
    pub user_id: UserId,
    pub email: EmailAddress,
    pub created_at: DateTime<Utc>,
}

impl Session {
    /// Open a new session with a freshly generated token
    pub fn open(user_id: UserId, email: EmailAddress) -> Self {
        Self {
            token: SessionToken::generate(),
            user_id,
            email,
            created_at: Utc::now(),
        }
    }

    /// Name used in the dashboard greeting
    pub fn display_name(&self) -> &str {
        self.email.local_part()
    }
}
