//! Fleet view
//!
//! Filtering, status counts and the halt / let-go overrides over an ordered
//! list of trains. Nothing here mutates its input: filters return new
//! vectors, and overrides return an updated copy of the whole fleet.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::entities::Train;
use crate::errors::DomainError;
use crate::value_objects::{TrainId, TrainStatus};

/// Status side of the fleet filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum StatusFilter {
    #[default]
    All,
    Only(TrainStatus),
}

impl StatusFilter {
    pub fn admits(&self, status: TrainStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == status,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(status) => write!(f, "{status}"),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse::<TrainStatus>().map(Self::Only)
    }
}

impl TryFrom<String> for StatusFilter {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<StatusFilter> for String {
    fn from(value: StatusFilter) -> Self {
        value.to_string()
    }
}

impl From<TrainStatus> for StatusFilter {
    fn from(status: TrainStatus) -> Self {
        Self::Only(status)
    }
}

/// Per-status train counts for the dashboard header
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub on_time: usize,
    pub delayed: usize,
    pub halted: usize,
    pub total: usize,
}

impl StatusCounts {
    /// Count every train in one pass
    pub fn tally(trains: &[Train]) -> Self {
        trains.iter().fold(
            Self {
                total: trains.len(),
                ..Self::default()
            },
            |mut counts, train| {
                match train.status {
                    TrainStatus::OnTime => counts.on_time += 1,
                    TrainStatus::Delayed => counts.delayed += 1,
                    TrainStatus::Halted => counts.halted += 1,
                }
                counts
            },
        )
    }

    pub const fn get(&self, status: TrainStatus) -> usize {
        match status {
            TrainStatus::OnTime => self.on_time,
            TrainStatus::Delayed => self.delayed,
            TrainStatus::Halted => self.halted,
        }
    }
}

/// Trains matching both the free-text query and the status filter
///
/// The query is a case-insensitive substring of either the train number or
/// its name; an empty query matches every train. Input order is preserved.
pub fn filter(trains: &[Train], query: &str, status_filter: StatusFilter) -> Vec<Train> {
    let needle = query.to_lowercase();
    trains
        .iter()
        .filter(|train| train.matches_lowercase(&needle) && status_filter.admits(train.status))
        .cloned()
        .collect()
}

/// Number of trains currently in `status`
pub fn count_by_status(trains: &[Train], status: TrainStatus) -> usize {
    trains.iter().filter(|t| t.status == status).count()
}

fn with_status(trains: &[Train], train_id: &TrainId, status: TrainStatus) -> Vec<Train> {
    trains
        .iter()
        .map(|train| {
            if &train.id == train_id {
                Train {
                    status,
                    ..train.clone()
                }
            } else {
                train.clone()
            }
        })
        .collect()
}

/// Copy of the fleet with `train_id` set to halted
///
/// An unknown id yields an unchanged copy.
pub fn halt(trains: &[Train], train_id: &TrainId) -> Vec<Train> {
    with_status(trains, train_id, TrainStatus::Halted)
}

/// Copy of the fleet with `train_id` set back to on-time
///
/// An unknown id yields an unchanged copy.
pub fn let_go(trains: &[Train], train_id: &TrainId) -> Vec<Train> {
    with_status(trains, train_id, TrainStatus::OnTime)
}
