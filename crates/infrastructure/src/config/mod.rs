//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server and logging settings
//! - `fleet`: Train data source and card defaults
//! - `auth`: Secret policy and seeded accounts

mod auth;
mod fleet;
mod server;

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub use auth::{AccountEntry, AuthConfig};
pub use fleet::FleetConfig;
pub use server::ServerConfig;

use crate::adapters::PasswordHasher;

/// Prefix for environment overrides, e.g. `RAILWATCH_SERVER__PORT=8080`
pub const ENV_PREFIX: &str = "RAILWATCH";

/// Application environment (development or production)
///
/// Production hides internal error details from API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Development environment
    #[default]
    Development,
    /// Production environment
    Production,
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(format!(
                "Invalid environment: {s}. Use 'development' or 'production'"
            )),
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment (development or production)
    #[serde(default)]
    pub environment: Option<Environment>,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Fleet data source configuration
    #[serde(default)]
    pub fleet: FleetConfig,

    /// Identity provider configuration
    #[serde(default)]
    pub auth: AuthConfig,
}

impl AppConfig {
    /// Load configuration from environment and optional `config.toml`
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_with(config::File::with_name("config").required(false))
    }

    /// Load configuration from a specific file, still honouring environment overrides
    pub fn load_from(path: &Path) -> Result<Self, config::ConfigError> {
        Self::load_with(config::File::from(path).required(true))
    }

    fn load_with(
        file: config::File<config::FileSourceFile, config::FileFormat>,
    ) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Start with defaults
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            // Load from file if exists
            .add_source(file)
            // Override with environment variables (e.g., RAILWATCH_SERVER__PORT)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("server.allowed_origins")
                    .try_parsing(true),
            );

        let config: Self = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the server cannot start with
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        if !matches!(self.server.log_format.as_str(), "text" | "json") {
            return Err(config::ConfigError::Message(format!(
                "server.log_format must be 'text' or 'json', got '{}'",
                self.server.log_format
            )));
        }
        if self.auth.min_secret_len == 0 {
            return Err(config::ConfigError::Message(
                "auth.min_secret_len must be at least 1".to_string(),
            ));
        }
        if self.auth.event_capacity == 0 {
            return Err(config::ConfigError::Message(
                "auth.event_capacity must be at least 1".to_string(),
            ));
        }
        if let Some(domain) = self
            .auth
            .identifier_domain
            .as_deref()
            .filter(|d| d.trim().is_empty() || d.contains('@'))
        {
            return Err(config::ConfigError::Message(format!(
                "auth.identifier_domain must be a bare domain, got '{domain}'"
            )));
        }
        if let Some(account) = self
            .auth
            .accounts
            .iter()
            .find(|a| !PasswordHasher::is_hashed(&a.password_hash))
        {
            return Err(config::ConfigError::Message(format!(
                "auth.accounts entry for {} must carry an argon2 PHC hash",
                account.email
            )));
        }
        Ok(())
    }

    /// Effective environment, defaulting to development
    pub fn environment(&self) -> Environment {
        self.environment.unwrap_or_default()
    }

    pub fn is_production(&self) -> bool {
        self.environment() == Environment::Production
    }
}
