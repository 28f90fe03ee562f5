//! Railwatch HTTP presentation layer
//!
//! JSON API for the section dashboard: sign-in, the fleet list and the
//! halt / let-go controls.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;
pub mod tasks;

pub use error::{ApiError, set_expose_internal_errors};
pub use middleware::{SessionAuthLayer, ValidatedJson, ValidationError};
pub use routes::create_router;
pub use server::serve;
pub use state::AppState;
