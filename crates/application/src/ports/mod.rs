//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod identity_provider_port;
mod train_source_port;

#[cfg(test)]
pub use identity_provider_port::MockIdentityProviderPort;
pub use identity_provider_port::{IdentityProviderPort, SessionEvent};
#[cfg(test)]
pub use train_source_port::MockTrainSourcePort;
pub use train_source_port::TrainSourcePort;
