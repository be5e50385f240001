use serde::{Deserialize, Serialize};

use crate::services::common::BusType;

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GeneralConfig {
    /// Default log level filter when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Bus to inspect when a command does not name one explicitly.
    #[serde(default)]
    pub default_bus: BusType,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            default_bus: BusType::default(),
        }
    }
}
