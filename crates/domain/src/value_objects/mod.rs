//! Value Objects - Immutable, identity-less domain primitives

mod display_category;
mod email_address;
mod session_token;
mod station_status;
mod station_time;
mod train_id;
mod train_status;
mod user_id;

pub use display_category::DisplayCategory;
pub use email_address::EmailAddress;
pub use session_token::SessionToken;
pub use station_status::StationStatus;
pub use station_time::StationTime;
pub use train_id::TrainId;
pub use train_status::{ControlAction, TrainStatus};
pub use user_id::UserId;
