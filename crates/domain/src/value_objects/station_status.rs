//! Per-station progress status

use serde::{Deserialize, Serialize};

use super::DisplayCategory;

/// Where a station sits relative to the train
///
/// A well-formed route has every station before the `Current` one marked
/// `Completed` and every station after it `Upcoming`. That ordering is not
/// enforced; the route model stays total on malformed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StationStatus {
    Completed,
    Current,
    Upcoming,
    /// Any status string the data source sends that is not recognised
    #[serde(other)]
    Unknown,
}

impl StationStatus {
    /// Indicator colour for the station timeline
    ///
    /// Unrecognised statuses render like upcoming stations.
    #[must_use]
    pub const fn category(&self) -> DisplayCategory {
        match self {
            Self::Completed => DisplayCategory::Success,
            Self::Current => DisplayCategory::Warning,
            Self::Upcoming | Self::Unknown => DisplayCategory::Muted,
        }
    }

    /// Badge text, absent for unrecognised statuses
    #[must_use]
    pub const fn badge(&self) -> Option<&'static str> {
        match self {
            Self::Completed => Some("Completed"),
            Self::Current => Some("Current"),
            Self::Upcoming => Some("Upcoming"),
            Self::Unknown => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_strings_deserialize_to_unknown() {
        let status: StationStatus = serde_json::from_str(r#""skipped""#).unwrap();
        assert_eq!(status, StationStatus::Unknown);
    }

    #[test]
    fn known_strings_deserialize() {
        let status: StationStatus = serde_json::from_str(r#""current""#).unwrap();
        assert_eq!(status, StationStatus::Current);
    }

    #[test]
    fn unknown_falls_back_to_muted_without_badge() {
        assert_eq!(StationStatus::Unknown.category(), DisplayCategory::Muted);
        assert_eq!(StationStatus::Unknown.badge(), None);
        assert_eq!(StationStatus::Upcoming.badge(), Some("Upcoming"));
    }
}
