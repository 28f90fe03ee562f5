//! Colour category shared by station indicators and train status badges

use serde::{Deserialize, Serialize};

/// Presentation category a status maps to
///
/// The dashboard renders each category with its own palette entry; the model
/// only decides which one applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayCategory {
    /// Done or healthy (green)
    Success,
    /// In progress or needing attention (amber)
    Warning,
    /// Stopped (red)
    Destructive,
    /// Not yet reached or unknown (grey)
    Muted,
}

impl DisplayCategory {
    /// Stable name used by the dashboard stylesheet
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Destructive => "destructive",
            Self::Muted => "muted",
        }
    }
}

impl std::fmt::Display for DisplayCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
