//! Train entity - a service running on the section

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use super::Route;
use crate::fixtures;
use crate::value_objects::{TrainId, TrainStatus};

const DEFAULT_TRAIN_TYPE: &str = "Express";
const DEFAULT_PRIORITY: &str = "Normal";

/// A train record as supplied by the train data source
///
/// Scheduling fields are opaque display strings. Only `status` ever changes
/// after a record is loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Train {
    pub id: TrainId,
    pub number: String,
    pub name: String,
    pub status: TrainStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starting_station: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ending_station: Option<String>,
    #[serde(default)]
    pub departure_time: String,
    #[serde(default)]
    pub eta: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_arrival: Option<String>,
    #[serde(default)]
    pub estimated_duration: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_speed_kmh: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route: Option<Route>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub train_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_departure: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_station: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay_minutes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<String>,
}

impl Train {
    /// Create a train with the identifying fields set and everything else empty
    pub fn new(
        id: impl Into<TrainId>,
        number: impl Into<String>,
        name: impl Into<String>,
        status: TrainStatus,
    ) -> Self {
        Self {
            id: id.into(),
            number: number.into(),
            name: name.into(),
            status,
            starting_station: None,
            ending_station: None,
            departure_time: String::new(),
            eta: String::new(),
            estimated_arrival: None,
            estimated_duration: String::new(),
            current_speed_kmh: None,
            route: None,
            train_type: None,
            priority: None,
            scheduled_departure: None,
            current_station: None,
            location: None,
            delay_minutes: None,
            additional_info: None,
        }
    }

    #[must_use]
    pub fn with_terminals(mut self, starting: impl Into<String>, ending: impl Into<String>) -> Self {
        self.starting_station = Some(starting.into());
        self.ending_station = Some(ending.into());
        self
    }

    #[must_use]
    pub fn with_schedule(
        mut self,
        departure_time: impl Into<String>,
        eta: impl Into<String>,
        estimated_duration: impl Into<String>,
    ) -> Self {
        self.departure_time = departure_time.into();
        self.eta = eta.into();
        self.estimated_duration = estimated_duration.into();
        self
    }

    #[must_use]
    pub fn with_estimated_arrival(mut self, estimated_arrival: impl Into<String>) -> Self {
        self.estimated_arrival = Some(estimated_arrival.into());
        self
    }

    #[must_use]
    pub fn with_route(mut self, route: Route) -> Self {
        self.route = Some(route);
        self
    }

    #[must_use]
    pub const fn with_speed(mut self, kmh: u32) -> Self {
        self.current_speed_kmh = Some(kmh);
        self
    }

    #[must_use]
    pub fn with_position(mut self, current_station: impl Into<String>, location: impl Into<String>) -> Self {
        self.current_station = Some(current_station.into());
        self.location = Some(location.into());
        self
    }

    #[must_use]
    pub const fn with_delay(mut self, minutes: u32) -> Self {
        self.delay_minutes = Some(minutes);
        self
    }

    #[must_use]
    pub fn with_additional_info(mut self, info: impl Into<String>) -> Self {
        self.additional_info = Some(info.into());
        self
    }

    /// The train's route, or the display fallback when none was supplied
    pub fn route_or_fallback(&self) -> Cow<'_, Route> {
        self.route.as_ref().map_or_else(
            || {
                Cow::Owned(fixtures::fallback_route(
                    &self.departure_time,
                    self.estimated_arrival(),
                ))
            },
            Cow::Borrowed,
        )
    }

    pub fn uses_fallback_route(&self) -> bool {
        self.route.is_none()
    }

    /// Explicit starting station, else the route's first station
    pub fn starting_station(&self) -> String {
        self.starting_station
            .clone()
            .unwrap_or_else(|| self.route_or_fallback().origin().name.clone())
    }

    /// Explicit ending station, else the route's last station
    pub fn ending_station(&self) -> String {
        self.ending_station
            .clone()
            .unwrap_or_else(|| self.route_or_fallback().destination().name.clone())
    }

    /// Estimated arrival, falling back to the next-station ETA
    pub fn estimated_arrival(&self) -> &str {
        self.estimated_arrival.as_deref().unwrap_or(&self.eta)
    }

    /// Scheduled departure, falling back to the actual departure time
    pub fn scheduled_departure(&self) -> &str {
        self.scheduled_departure
            .as_deref()
            .unwrap_or(&self.departure_time)
    }

    pub fn train_type(&self) -> &str {
        self.train_type.as_deref().unwrap_or(DEFAULT_TRAIN_TYPE)
    }

    pub fn priority(&self) -> &str {
        self.priority.as_deref().unwrap_or(DEFAULT_PRIORITY)
    }

    /// "+N min" when a delay is recorded, "On Time" otherwise
    pub fn delay_label(&self) -> String {
        match self.delay_minutes {
            Some(minutes) if minutes > 0 => format!("+{minutes} min"),
            _ => "On Time".to_string(),
        }
    }

    /// Case-insensitive substring match on number or name
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.number.to_lowercase().contains(needle) || self.name.to_lowercase().contains(needle)
    }
}
