mod general;
mod paths;

use std::fs;

use serde::{Deserialize, Serialize};

pub use general::GeneralConfig;
pub use paths::ConfigPaths;

use crate::core::{EspyError, Result};

/// Main configuration structure for espy.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,
}

impl Config {
    /// Loads configuration from the XDG config directory.
    ///
    /// Falls back to defaults when no config file exists.
    ///
    /// # Errors
    /// Returns error if the config file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let path = ConfigPaths::config_file()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)?;
        toml::from_str(&contents).map_err(|e| EspyError::toml_parse(e, Some(&path)))
    }
}
