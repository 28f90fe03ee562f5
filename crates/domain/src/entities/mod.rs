//! Domain entities - Objects with identity and lifecycle

mod route;
mod session;
mod station;
mod train;

pub use route::Route;
pub use session::Session;
pub use station::Station;
pub use train::Train;
