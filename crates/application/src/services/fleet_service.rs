//! Fleet Service - Owns the canonical train list for the dashboard
//!
//! Reads project the list through the fleet view; halt / let-go compute the
//! updated list with the fleet view and swap it in under the write lock.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use domain::{
    DistanceMarkers, DomainError, StationDisplay, StatusCounts, StatusFilter, Train, TrainId,
    TrainStatus, fleet_view,
};
use parking_lot::RwLock;
use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::{error::ApplicationError, ports::TrainSourcePort};

/// Filtered trains plus counts over the whole fleet
#[derive(Debug, Clone, Serialize)]
pub struct FleetSnapshot {
    pub trains: Vec<Train>,
    pub counts: StatusCounts,
    pub filter: StatusFilter,
    pub query: String,
    pub loaded_at: DateTime<Utc>,
}

/// Everything the route timeline of one train needs
#[derive(Debug, Clone, Serialize)]
pub struct RouteProgress {
    pub train_id: TrainId,
    pub origin: String,
    pub destination: String,
    pub position_percent: f64,
    pub markers: DistanceMarkers,
    pub total_distance_km: f64,
    /// Name of the route's current station, if one is flagged
    pub current_station: Option<String>,
    pub stations: Vec<StationDisplay>,
    pub uses_fallback_route: bool,
}

impl RouteProgress {
    /// Project a train's route (or the fallback route) for display
    pub fn for_train(train: &Train) -> Self {
        let route = train.route_or_fallback();
        Self {
            train_id: train.id.clone(),
            origin: train.starting_station(),
            destination: train.ending_station(),
            position_percent: route.position_percent(),
            markers: route.distance_markers(),
            total_distance_km: route.total_distance_km(),
            current_station: route.current_station().map(|s| s.name.clone()),
            stations: route.classify(),
            uses_fallback_route: train.uses_fallback_route(),
        }
    }
}

#[derive(Debug)]
struct FleetState {
    trains: Vec<Train>,
    loaded_at: DateTime<Utc>,
}

/// Service holding the fleet and applying manual overrides
pub struct FleetService {
    source: Arc<dyn TrainSourcePort>,
    state: RwLock<FleetState>,
}

impl std::fmt::Debug for FleetService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FleetService")
            .field("source", &self.source.describe())
            .field("trains", &self.state.read().trains.len())
            .finish_non_exhaustive()
    }
}

impl FleetService {
    /// Load the initial fleet from the data source
    #[instrument(skip(source), fields(source = %source.describe()))]
    pub async fn load(source: Arc<dyn TrainSourcePort>) -> Result<Self, ApplicationError> {
        let trains = source.fetch_trains().await?;
        info!(count = trains.len(), "Fleet loaded");

        Ok(Self {
            source,
            state: RwLock::new(FleetState {
                trains,
                loaded_at: Utc::now(),
            }),
        })
    }

    /// Number of trains in the fleet
    pub fn len(&self) -> usize {
        self.state.read().trains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.read().trains.is_empty()
    }

    pub fn source_description(&self) -> String {
        self.source.describe()
    }

    /// Copy of the full fleet in source order
    pub fn trains(&self) -> Vec<Train> {
        self.state.read().trains.clone()
    }

    /// Trains matching the query and filter, with counts over the whole fleet
    pub fn dashboard(&self, query: &str, filter: StatusFilter) -> FleetSnapshot {
        let state = self.state.read();
        let trains = fleet_view::filter(&state.trains, query, filter);
        debug!(
            query,
            filter = %filter,
            visible = trains.len(),
            total = state.trains.len(),
            "Fleet filtered"
        );

        FleetSnapshot {
            trains,
            counts: StatusCounts::tally(&state.trains),
            filter,
            query: query.to_string(),
            loaded_at: state.loaded_at,
        }
    }

    /// Number of trains in `status`
    pub fn count(&self, status: TrainStatus) -> usize {
        fleet_view::count_by_status(&self.state.read().trains, status)
    }

    pub fn get(&self, id: &TrainId) -> Result<Train, ApplicationError> {
        self.state
            .read()
            .trains
            .iter()
            .find(|t| &t.id == id)
            .cloned()
            .ok_or_else(|| DomainError::not_found("Train", id.to_string()).into())
    }

    pub fn route_progress(&self, id: &TrainId) -> Result<RouteProgress, ApplicationError> {
        self.get(id).map(|train| RouteProgress::for_train(&train))
    }

    /// Halt a train
    ///
    /// Repeating the call leaves the train halted.
    #[instrument(skip(self, id), fields(train_id = %id))]
    pub fn halt(&self, id: &TrainId) -> Result<Train, ApplicationError> {
        self.apply(id, TrainStatus::Halted, fleet_view::halt)
    }

    /// Let a train go, setting it back to on-time
    #[instrument(skip(self, id), fields(train_id = %id))]
    pub fn let_go(&self, id: &TrainId) -> Result<Train, ApplicationError> {
        self.apply(id, TrainStatus::OnTime, fleet_view::let_go)
    }

    fn apply(
        &self,
        id: &TrainId,
        status: TrainStatus,
        update: fn(&[Train], &TrainId) -> Vec<Train>,
    ) -> Result<Train, ApplicationError> {
        let mut state = self.state.write();
        let previous = state
            .trains
            .iter()
            .find(|t| &t.id == id)
            .map(|t| t.status)
            .ok_or_else(|| DomainError::not_found("Train", id.to_string()))?;

        state.trains = update(&state.trains, id);

        info!(
            from = %previous,
            to = %status,
            "Train status overridden"
        );

        state
            .trains
            .iter()
            .find(|t| &t.id == id)
            .cloned()
            .ok_or_else(|| ApplicationError::Internal(format!("Train {id} vanished during update")))
    }

    /// Re-fetch the fleet from the data source, discarding local overrides
    #[instrument(skip(self))]
    pub async fn refresh(&self) -> Result<FleetSnapshot, ApplicationError> {
        let trains = self.source.fetch_trains().await?;
        {
            let mut state = self.state.write();
            info!(before = state.trains.len(), after = trains.len(), "Fleet refreshed");
            state.trains = trains;
            state.loaded_at = Utc::now();
        }
        Ok(self.dashboard("", StatusFilter::All))
    }
}
