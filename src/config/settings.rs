//! User settings for tripplan
//!
//! Manages user preferences for the planning session: the preset export
//! filename and whether over-budget additions trigger a warning.

use serde::{Deserialize, Serialize};

use super::paths::TripPaths;
use crate::error::TripError;

/// User settings for tripplan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Filename offered as the default at the export prompt
    #[serde(default = "default_export_file")]
    pub default_export_file: String,

    /// Warn immediately when an addition pushes the plan over budget
    #[serde(default = "default_warn_over_budget")]
    pub warn_over_budget: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_export_file() -> String {
    "travel_plan.txt".to_string()
}

fn default_warn_over_budget() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            default_export_file: default_export_file(),
            warn_over_budget: default_warn_over_budget(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &TripPaths) -> Result<Self, TripError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| TripError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents)
                .map_err(|e| TripError::Config(format!("Failed to parse settings file: {}", e)))?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TripPaths) -> Result<(), TripError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| TripError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| TripError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
