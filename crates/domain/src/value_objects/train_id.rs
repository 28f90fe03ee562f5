//! Train identifier value object

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier of a train record
///
/// Issued by the train data source and never reinterpreted here; two records
/// refer to the same train exactly when their ids are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrainId(String);

impl TrainId {
    /// Wrap a raw identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TrainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TrainId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for TrainId {
    fn from(value: String) -> Self {
        Self(value)
    }
}
