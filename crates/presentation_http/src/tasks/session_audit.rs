//! Session audit task
//!
//! Subscribes to the identity provider's session events and writes one log
//! line per sign-in and sign-out.

use std::sync::Arc;

use application::{AuthService, SessionEvent};
use tokio::sync::broadcast::error::RecvError;
use tracing::{info, warn};

/// Spawn a task that logs every session event until the provider goes away
///
/// Returns a `JoinHandle` that can be used to abort the task when shutting down.
pub fn spawn_session_audit_task(auth_service: &Arc<AuthService>) -> tokio::task::JoinHandle<()> {
    let mut events = auth_service.subscribe();
    info!("Starting session audit task");

    tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(event) => log_event(&event),
                Err(RecvError::Lagged(skipped)) => {
                    warn!(skipped, "Session audit fell behind, events dropped");
                },
                Err(RecvError::Closed) => {
                    info!("Session event channel closed, stopping audit task");
                    break;
                },
            }
        }
    })
}

fn log_event(event: &SessionEvent) {
    match event {
        SessionEvent::SignedIn { user_id, email } => {
            info!(user_id = %user_id, email = %email, "User signed in");
        },
        SessionEvent::SignedOut { user_id, email } => {
            info!(user_id = %user_id, email = %email, "User signed out");
        },
    }
}
