//! Application layer - Use cases and orchestration
//!
//! Holds the canonical fleet and the sign-in flow, and defines the ports the
//! infrastructure adapters implement.

pub mod error;
pub mod ports;
pub mod services;

pub use error::{ApplicationError, AuthError};
pub use ports::*;
pub use services::*;
