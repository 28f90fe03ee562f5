//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer: the fixture-backed
//! train source and the in-memory identity provider. Also owns configuration
//! loading and tracing setup.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use config::{AccountEntry, AppConfig, AuthConfig, Environment, FleetConfig, ServerConfig};
pub use telemetry::{LogFormat, TelemetryError, init_tracing};
