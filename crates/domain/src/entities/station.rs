//! Station entity - one stop on a train's route

use serde::{Deserialize, Serialize};

use crate::value_objects::{StationStatus, StationTime};

/// A stop on a route, with its cumulative distance from the origin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    /// Short code, unique within a route (e.g. "ANG")
    pub code: String,
    pub name: String,
    pub arrival: StationTime,
    pub departure: StationTime,
    /// Kilometres from the first station of the route
    pub distance_km: f64,
    pub status: StationStatus,
    /// Platform label, display only
    pub platform: String,
}

impl Station {
    /// Create an upcoming station with no times or platform set
    pub fn new(code: impl Into<String>, name: impl Into<String>, distance_km: f64) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            arrival: StationTime::at(""),
            departure: StationTime::at(""),
            distance_km,
            status: StationStatus::Upcoming,
            platform: String::new(),
        }
    }

    #[must_use]
    pub fn with_times(mut self, arrival: StationTime, departure: StationTime) -> Self {
        self.arrival = arrival;
        self.departure = departure;
        self
    }

    #[must_use]
    pub const fn with_status(mut self, status: StationStatus) -> Self {
        self.status = status;
        self
    }

    #[must_use]
    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = platform.into();
        self
    }

    pub fn is_current(&self) -> bool {
        self.status == StationStatus::Current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_fields() {
        let station = Station::new("DD", "Daund Junction", 72.0)
            .with_times(StationTime::at("07:45"), StationTime::at("07:50"))
            .with_status(StationStatus::Completed)
            .with_platform("PF 2");

        assert_eq!(station.code, "DD");
        assert_eq!(station.arrival, StationTime::at("07:45"));
        assert_eq!(station.status, StationStatus::Completed);
        assert_eq!(station.platform, "PF 2");
        assert!(!station.is_current());
    }

    #[test]
    fn deserializes_with_sentinels() {
        let json = r#"{
            "code": "PUNE",
            "name": "Pune Junction",
            "arrival": "Start",
            "departure": "06:00",
            "distance_km": 0,
            "status": "completed",
            "platform": "PF 1"
        }"#;
        let station: Station = serde_json::from_str(json).unwrap();
        assert_eq!(station.arrival, StationTime::RouteStart);
        assert!(station.distance_km.abs() < f64::EPSILON);
    }
}
