//! Route progress model
//!
//! Pure computations over an ordered station list: how far along the route
//! the train is, how each station should be drawn, and where the distance
//! ticks under the progress bar fall.
//!
//! Every function takes a station slice rather than a [`Route`](crate::Route)
//! so that callers holding raw data get the same behaviour. An empty slice is
//! a precondition violation and fails with [`DomainError::EmptyRoute`]; the
//! fallback route is substituted one layer up, on the train record.
//!
//! # Examples
//!
//! ```
//! use domain::route_model::compute_position;
//! use domain::{Station, StationStatus};
//!
//! let stations = vec![
//!     Station::new("A", "Alpha", 0.0).with_status(StationStatus::Completed),
//!     Station::new("B", "Bravo", 100.0).with_status(StationStatus::Current),
//!     Station::new("C", "Charlie", 200.0),
//! ];
//! assert_eq!(compute_position(&stations).unwrap(), 50.0);
//! ```

use serde::Serialize;

use crate::entities::Station;
use crate::errors::DomainError;
use crate::value_objects::DisplayCategory;

/// How a single station is drawn on the timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DisplayState {
    pub category: DisplayCategory,
    /// Badge text; `None` for statuses the dashboard does not recognise
    pub badge: Option<&'static str>,
}

/// A station paired with its display state
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationDisplay {
    pub station: Station,
    pub state: DisplayState,
}

/// Tick labels under the progress bar
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct DistanceMarkers {
    pub start_km: f64,
    pub midpoint_km: u64,
    pub end_km: f64,
}

fn non_empty(stations: &[Station]) -> Result<&[Station], DomainError> {
    if stations.is_empty() {
        Err(DomainError::EmptyRoute)
    } else {
        Ok(stations)
    }
}

fn total_distance_km(stations: &[Station]) -> f64 {
    stations.last().map_or(0.0, |s| s.distance_km)
}

/// Percentage of the total distance covered, in `[0, 100]`
///
/// Uses the first station marked `current`. With no current station the
/// result is 0, including for a route whose stations are all completed.
/// A route whose last station sits at 0 km also reports 0.
pub fn compute_position(stations: &[Station]) -> Result<f64, DomainError> {
    let stations = non_empty(stations)?;

    let Some(current) = stations.iter().find(|s| s.is_current()) else {
        return Ok(0.0);
    };

    let total = total_distance_km(stations);
    if !total.is_finite() || total <= 0.0 {
        return Ok(0.0);
    }

    let percent = current.distance_km / total * 100.0;
    if percent.is_nan() {
        return Ok(0.0);
    }
    Ok(percent.clamp(0.0, 100.0))
}

/// Display state for every station, in route order
pub fn classify_stations(stations: &[Station]) -> Result<Vec<StationDisplay>, DomainError> {
    let stations = non_empty(stations)?;

    Ok(stations
        .iter()
        .map(|station| StationDisplay {
            station: station.clone(),
            state: DisplayState {
                category: station.status.category(),
                badge: station.status.badge(),
            },
        })
        .collect())
}

/// Start, midpoint and end labels for the distance axis
///
/// The midpoint is rounded half away from zero, which for non-negative
/// distances is the same as rounding half up.
pub fn derive_distance_markers(stations: &[Station]) -> Result<DistanceMarkers, DomainError> {
    let stations = non_empty(stations)?;

    let end_km = total_distance_km(stations);
    let midpoint = (end_km / 2.0).round();
    let midpoint_km = if midpoint.is_finite() && midpoint > 0.0 {
        midpoint as u64
    } else {
        0
    };

    Ok(DistanceMarkers {
        start_km: 0.0,
        midpoint_km,
        end_km,
    })
}
