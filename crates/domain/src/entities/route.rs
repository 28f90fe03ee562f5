//! Route entity - the ordered stations a train traverses

use serde::{Deserialize, Serialize};

use super::Station;
use crate::errors::DomainError;
use crate::route_model::{self, DistanceMarkers, StationDisplay};

/// A non-empty, ordered list of stations with non-decreasing distances
///
/// The checks run on construction and on deserialization, so every `Route`
/// value can be handed to the route model without a precondition failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Station>", into = "Vec<Station>")]
pub struct Route {
    stations: Vec<Station>,
}

impl Route {
    /// Build a route, validating station order and distances
    pub fn new(stations: Vec<Station>) -> Result<Self, DomainError> {
        if stations.is_empty() {
            return Err(DomainError::EmptyRoute);
        }

        for station in &stations {
            if !station.distance_km.is_finite() || station.distance_km < 0.0 {
                return Err(DomainError::ValidationError(format!(
                    "station {} has invalid distance {}",
                    station.code, station.distance_km
                )));
            }
        }

        if let Some(pair) = stations
            .windows(2)
            .find(|pair| pair[1].distance_km < pair[0].distance_km)
        {
            return Err(DomainError::ValidationError(format!(
                "distance decreases from {} ({} km) to {} ({} km)",
                pair[0].code, pair[0].distance_km, pair[1].code, pair[1].distance_km
            )));
        }

        Ok(Self { stations })
    }

    /// Wrap stations already known to satisfy the route invariants
    pub(crate) fn from_trusted(stations: Vec<Station>) -> Self {
        debug_assert!(!stations.is_empty());
        Self { stations }
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    pub fn origin(&self) -> &Station {
        &self.stations[0]
    }

    pub fn destination(&self) -> &Station {
        &self.stations[self.stations.len() - 1]
    }

    /// Distance of the last station
    pub fn total_distance_km(&self) -> f64 {
        self.destination().distance_km
    }

    /// First station flagged `current`, if any
    pub fn current_station(&self) -> Option<&Station> {
        self.stations.iter().find(|s| s.is_current())
    }

    /// Progress along the route in percent, see [`route_model::compute_position`]
    pub fn position_percent(&self) -> f64 {
        route_model::compute_position(&self.stations).unwrap_or_default()
    }

    pub fn classify(&self) -> Vec<StationDisplay> {
        route_model::classify_stations(&self.stations).unwrap_or_default()
    }

    pub fn distance_markers(&self) -> DistanceMarkers {
        route_model::derive_distance_markers(&self.stations).unwrap_or_default()
    }
}

impl TryFrom<Vec<Station>> for Route {
    type Error = DomainError;

    fn try_from(stations: Vec<Station>) -> Result<Self, Self::Error> {
        Self::new(stations)
    }
}

impl From<Route> for Vec<Station> {
    fn from(route: Route) -> Self {
        route.stations
    }
}
