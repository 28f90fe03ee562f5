//! Fleet data source configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where the dashboard gets its trains from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FleetConfig {
    /// Section name shown in the dashboard header
    #[serde(default = "default_section_name")]
    pub section_name: String,

    /// JSON file with an array of train records
    ///
    /// When unset the built-in mock fleet is served.
    #[serde(default)]
    pub fixture_path: Option<PathBuf>,

    /// Speed shown on train cards whose record carries none, in km/h
    #[serde(default = "default_speed_kmh")]
    pub default_speed_kmh: u32,
}

fn default_section_name() -> String {
    "Chennai Section".to_string()
}

const fn default_speed_kmh() -> u32 {
    65
}

impl Default for FleetConfig {
    fn default() -> Self {
        Self {
            section_name: default_section_name(),
            fixture_path: None,
            default_speed_kmh: default_speed_kmh(),
        }
    }
}
