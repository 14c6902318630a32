use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Result, RollbookError};
use crate::feedback::Theme;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for rollbook, stored as config.json in the data directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RollbookConfig {
    /// Display theme for rendered feedback (dark or light).
    #[serde(default)]
    pub theme: Theme,
}

impl RollbookConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(RollbookError::Io)?;
        let config: RollbookConfig =
            serde_json::from_str(&content).map_err(RollbookError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(RollbookError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(RollbookError::Serialization)?;
        fs::write(config_path, content).map_err(RollbookError::Io)?;
        Ok(())
    }
}
