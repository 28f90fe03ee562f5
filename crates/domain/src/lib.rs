//! Domain layer for Railwatch
//!
//! Trains, routes and stations, the route progress model and the fleet view.
//! Everything here is synchronous and free of I/O.

pub mod entities;
pub mod errors;
pub mod fixtures;
pub mod fleet_view;
pub mod route_model;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use fleet_view::{StatusCounts, StatusFilter};
pub use route_model::{DisplayState, DistanceMarkers, StationDisplay};
pub use value_objects::*;
