//! Application state shared across handlers

use std::sync::Arc;

use application::{AuthService, FleetService};
use infrastructure::AppConfig;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Fleet service holding the canonical train list
    pub fleet_service: Arc<FleetService>,
    /// Auth service for sign-in and session lookup
    pub auth_service: Arc<AuthService>,
    /// Application configuration
    pub config: Arc<AppConfig>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("fleet_service", &self.fleet_service)
            .field("environment", &self.config.environment())
            .finish_non_exhaustive()
    }
}
