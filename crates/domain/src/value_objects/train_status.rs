//! Operational status of a train
//!
//! Independent of where the train is on its route: a train sitting at its
//! `current` station may be on-time, delayed or halted.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::DisplayCategory;
use crate::errors::DomainError;

/// Operational status of a train
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrainStatus {
    OnTime,
    Delayed,
    Halted,
}

/// The manual override offered for a train in its current status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ControlAction {
    Halt,
    LetGo,
}

impl TrainStatus {
    /// Every status, in dashboard order
    pub const ALL: [Self; 3] = [Self::OnTime, Self::Delayed, Self::Halted];

    /// Wire form (`on-time`, `delayed`, `halted`)
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::OnTime => "on-time",
            Self::Delayed => "delayed",
            Self::Halted => "halted",
        }
    }

    /// Human-readable label for badges and counters
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::OnTime => "On Time",
            Self::Delayed => "Delayed",
            Self::Halted => "Halted",
        }
    }

    #[must_use]
    pub const fn category(&self) -> DisplayCategory {
        match self {
            Self::OnTime => DisplayCategory::Success,
            Self::Delayed => DisplayCategory::Warning,
            Self::Halted => DisplayCategory::Destructive,
        }
    }

    /// Halted trains can be let go; every other train can be halted
    #[must_use]
    pub const fn control_action(&self) -> ControlAction {
        match self {
            Self::Halted => ControlAction::LetGo,
            Self::OnTime | Self::Delayed => ControlAction::Halt,
        }
    }
}

impl ControlAction {
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Halt => "Halt",
            Self::LetGo => "Let Go",
        }
    }
}

impl fmt::Display for TrainStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrainStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "on-time" | "on_time" | "ontime" => Ok(Self::OnTime),
            "delayed" => Ok(Self::Delayed),
            "halted" => Ok(Self::Halted),
            other => Err(DomainError::InvalidStatus(other.to_string())),
        }
    }
}
