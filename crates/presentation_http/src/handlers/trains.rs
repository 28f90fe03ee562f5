//! Fleet dashboard handlers
//!
//! Train list with search and status filter, train cards, route progress and
//! the halt / let-go controls.

use application::{FleetSnapshot, RouteProgress};
use axum::{
    Json,
    extract::{Path, Query, State},
};
use chrono::{DateTime, Utc};
use domain::{
    ControlAction, DisplayCategory, StatusCounts, StatusFilter, Train, TrainId, TrainStatus,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// List trains query parameters
#[derive(Debug, Default, Deserialize)]
pub struct ListTrainsQuery {
    /// Case-insensitive search over train number and name
    #[serde(default)]
    pub q: Option<String>,
    /// `all`, `on-time`, `delayed` or `halted`
    #[serde(default)]
    pub status: Option<StatusFilter>,
}

/// Control button shown on a train card
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControlView {
    pub action: ControlAction,
    pub label: String,
}

/// Everything a train card renders
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainCard {
    pub id: TrainId,
    pub number: String,
    pub name: String,
    pub status: TrainStatus,
    pub status_label: String,
    pub category: DisplayCategory,
    pub control: ControlView,
    pub starting_station: String,
    pub ending_station: String,
    pub departure_time: String,
    pub scheduled_departure: String,
    pub eta: String,
    pub estimated_arrival: String,
    pub estimated_duration: String,
    pub current_speed_kmh: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_station: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub delay: String,
    pub train_type: String,
    pub priority: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<String>,
    pub uses_fallback_route: bool,
}

impl TrainCard {
    /// Project a train for display, filling in the configured default speed
    pub fn from_train(train: &Train, default_speed_kmh: u32) -> Self {
        let action = train.status.control_action();
        Self {
            id: train.id.clone(),
            number: train.number.clone(),
            name: train.name.clone(),
            status: train.status,
            status_label: train.status.label().to_string(),
            category: train.status.category(),
            control: ControlView {
                action,
                label: action.label().to_string(),
            },
            starting_station: train.starting_station(),
            ending_station: train.ending_station(),
            departure_time: train.departure_time.clone(),
            scheduled_departure: train.scheduled_departure().to_string(),
            eta: train.eta.clone(),
            estimated_arrival: train.estimated_arrival().to_string(),
            estimated_duration: train.estimated_duration.clone(),
            current_speed_kmh: train.current_speed_kmh.unwrap_or(default_speed_kmh),
            current_station: train.current_station.clone(),
            location: train.location.clone(),
            delay: train.delay_label(),
            train_type: train.train_type().to_string(),
            priority: train.priority().to_string(),
            additional_info: train.additional_info.clone(),
            uses_fallback_route: train.uses_fallback_route(),
        }
    }
}

/// Filtered train list for the dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainListResponse {
    pub section: String,
    pub query: String,
    pub filter: StatusFilter,
    /// Counts over the whole fleet, not just the visible trains
    pub counts: StatusCounts,
    pub trains: Vec<TrainCard>,
    pub loaded_at: DateTime<Utc>,
}

impl TrainListResponse {
    fn from_snapshot(state: &AppState, snapshot: FleetSnapshot) -> Self {
        let speed = state.config.fleet.default_speed_kmh;
        Self {
            section: state.config.fleet.section_name.clone(),
            query: snapshot.query,
            filter: snapshot.filter,
            counts: snapshot.counts,
            trains: snapshot
                .trains
                .iter()
                .map(|t| TrainCard::from_train(t, speed))
                .collect(),
            loaded_at: snapshot.loaded_at,
        }
    }
}

/// List trains matching the search box and status filter
///
/// GET /v1/trains?q=&status=
#[instrument(skip(state))]
pub async fn list_trains(
    State(state): State<AppState>,
    Query(query): Query<ListTrainsQuery>,
) -> Json<TrainListResponse> {
    let snapshot = state.fleet_service.dashboard(
        query.q.as_deref().unwrap_or_default(),
        query.status.unwrap_or_default(),
    );
    Json(TrainListResponse::from_snapshot(&state, snapshot))
}

/// Train card for one train
///
/// GET /v1/trains/{id}
pub async fn get_train(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TrainCard>, ApiError> {
    let train = state.fleet_service.get(&TrainId::new(id))?;
    Ok(Json(TrainCard::from_train(
        &train,
        state.config.fleet.default_speed_kmh,
    )))
}

/// Route timeline for one train
///
/// GET /v1/trains/{id}/route
pub async fn get_route(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<RouteProgress>, ApiError> {
    Ok(Json(state.fleet_service.route_progress(&TrainId::new(id))?))
}

/// Halt a train
///
/// POST /v1/trains/{id}/halt
#[instrument(skip(state))]
pub async fn halt_train(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TrainCard>, ApiError> {
    let train = state.fleet_service.halt(&TrainId::new(id))?;
    Ok(Json(TrainCard::from_train(
        &train,
        state.config.fleet.default_speed_kmh,
    )))
}

/// Let a halted train go
///
/// POST /v1/trains/{id}/let-go
#[instrument(skip(state))]
pub async fn let_go_train(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TrainCard>, ApiError> {
    let train = state.fleet_service.let_go(&TrainId::new(id))?;
    Ok(Json(TrainCard::from_train(
        &train,
        state.config.fleet.default_speed_kmh,
    )))
}

/// Re-fetch the fleet from its source, dropping manual overrides
///
/// POST /v1/trains/refresh
#[instrument(skip(state))]
pub async fn refresh_trains(
    State(state): State<AppState>,
) -> Result<Json<TrainListResponse>, ApiError> {
    let snapshot = state.fleet_service.refresh().await?;
    Ok(Json(TrainListResponse::from_snapshot(&state, snapshot)))
}
