//! HTTP middleware components
//!
//! Session authentication and validated request bodies.

pub mod auth;
pub mod validation;

pub use auth::{SessionAuth, SessionAuthLayer};
pub use validation::{ValidatedJson, ValidationError};
