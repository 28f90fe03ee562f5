//! Train data source port
//!
//! Supplies the ordered train list the fleet service starts from. Today this
//! is a fixture; a live deployment would back it with a fetch against the
//! section's control system returning the same `Train` shape.

use async_trait::async_trait;
use domain::Train;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for loading train records
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TrainSourcePort: Send + Sync {
    /// Fetch the full, ordered train list
    async fn fetch_trains(&self) -> Result<Vec<Train>, ApplicationError>;

    /// Short description of where trains come from, for logs and readiness
    fn describe(&self) -> String;
}
