//! Application services - Use case implementations

mod auth_service;
mod fleet_service;

pub use auth_service::AuthService;
pub use fleet_service::{FleetService, FleetSnapshot, RouteProgress};
