//! Fixture train source - Implements TrainSourcePort from bundled or file data

use std::path::PathBuf;

use application::{error::ApplicationError, ports::TrainSourcePort};
use async_trait::async_trait;
use domain::{Train, TrainStatus};
use tracing::{debug, instrument};

/// Train source backed by the built-in mock fleet or a JSON file
#[derive(Debug, Clone, Default)]
pub struct FixtureTrainSource {
    path: Option<PathBuf>,
}

impl FixtureTrainSource {
    /// Serve the built-in mock fleet
    pub const fn mock() -> Self {
        Self { path: None }
    }

    /// Serve the train records in a JSON array file, read on every fetch
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// Choose between file and mock data from an optional path
    pub fn from_config(path: Option<&PathBuf>) -> Self {
        path.map_or_else(Self::mock, |p| Self::from_file(p.clone()))
    }

    async fn read_file(path: &PathBuf) -> Result<Vec<Train>, ApplicationError> {
        let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
            ApplicationError::ExternalService(format!(
                "Failed to read train fixture {}: {e}",
                path.display()
            ))
        })?;

        serde_json::from_str(&raw).map_err(|e| {
            ApplicationError::ExternalService(format!(
                "Invalid train fixture {}: {e}",
                path.display()
            ))
        })
    }
}

/// Three trains on the Chennai section, one in each status
pub fn mock_fleet() -> Vec<Train> {
    vec![
        Train::new("1", "TN-12345", "Chennai Express", TrainStatus::OnTime)
            .with_terminals("Chennai Central", "Bangalore")
            .with_schedule("14:30", "16:45", "2h 15m")
            .with_position("Katpadi Junction", "Platform 2")
            .with_speed(72),
        Train::new("2", "TN-67890", "Coromandel Express", TrainStatus::Delayed)
            .with_terminals("Chennai", "Howrah")
            .with_schedule("15:15", "17:30", "2h 15m")
            .with_position("Arakkonam", "En Route")
            .with_delay(20)
            .with_additional_info("Running late after signal failure near Tiruvallur"),
        Train::new("3", "TN-11111", "Shatabdi Express", TrainStatus::Halted)
            .with_terminals("Chennai", "Mysore")
            .with_schedule("16:00", "18:15", "2h 15m")
            .with_position("Jolarpettai", "Platform 1")
            .with_speed(0),
    ]
}

#[async_trait]
impl TrainSourcePort for FixtureTrainSource {
    #[instrument(skip(self))]
    async fn fetch_trains(&self) -> Result<Vec<Train>, ApplicationError> {
        let trains = match &self.path {
            Some(path) => Self::read_file(path).await?,
            None => mock_fleet(),
        };
        debug!(count = trains.len(), "Fetched trains");
        Ok(trains)
    }

    fn describe(&self) -> String {
        self.path.as_ref().map_or_else(
            || "built-in mock fleet".to_string(),
            |p| format!("fixture file {}", p.display()),
        )
    }
}
