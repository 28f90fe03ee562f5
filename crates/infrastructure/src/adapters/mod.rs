//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod fixture_train_source;
mod in_memory_identity_provider;
mod password_hasher;

pub use fixture_train_source::{FixtureTrainSource, mock_fleet};
pub use in_memory_identity_provider::InMemoryIdentityProvider;
pub use password_hasher::{PasswordHashError, PasswordHasher};
