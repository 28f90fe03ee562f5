//! Arrival / departure time shown for a station

use std::fmt;

use serde::{Deserialize, Serialize};

const ROUTE_START: &str = "Start";
const ROUTE_END: &str = "End";

/// A wall-clock display string, or the sentinel marking either end of a route
///
/// The first station has no arrival and the last has no departure; the data
/// source sends the literal strings `"Start"` and `"End"` for those slots.
/// Times are never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StationTime {
    At(String),
    RouteStart,
    RouteEnd,
}

impl StationTime {
    pub fn at(time: impl Into<String>) -> Self {
        Self::At(time.into())
    }

    /// Whether the timeline should print this slot at all
    #[must_use]
    pub const fn is_shown(&self) -> bool {
        matches!(self, Self::At(_))
    }

    /// The wall-clock string, if this is not a sentinel
    pub fn time(&self) -> Option<&str> {
        match self {
            Self::At(t) => Some(t),
            Self::RouteStart | Self::RouteEnd => None,
        }
    }
}

impl From<String> for StationTime {
    fn from(value: String) -> Self {
        match value.as_str() {
            ROUTE_START => Self::RouteStart,
            ROUTE_END => Self::RouteEnd,
            _ => Self::At(value),
        }
    }
}

impl From<StationTime> for String {
    fn from(value: StationTime) -> Self {
        match value {
            StationTime::At(t) => t,
            StationTime::RouteStart => ROUTE_START.to_string(),
            StationTime::RouteEnd => ROUTE_END.to_string(),
        }
    }
}

impl fmt::Display for StationTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::At(t) => f.write_str(t),
            Self::RouteStart => f.write_str(ROUTE_START),
            Self::RouteEnd => f.write_str(ROUTE_END),
        }
    }
}
