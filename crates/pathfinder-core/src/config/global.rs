//! Config file discovery (~/.config/pathfinder/config.toml)

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::EditorConfig;
use crate::error::{PathfinderError, Result};

const CONFIG_DIR: &str = "pathfinder";
const CONFIG_FILE: &str = "config.toml";
pub const CONFIG_DIR_ENV_VAR: &str = "PATHFINDER_CONFIG_DIR";

impl EditorConfig {
    /// Location of the user config file
    pub fn config_path() -> Result<PathBuf> {
        // Allow environment variable override for testing
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    PathfinderError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load the user config, or defaults when no file exists
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            tracing::debug!(path = %path.display(), "config_absent_using_defaults");
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    /// Load and validate an explicit config file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            PathfinderError::Other(format!(
                "failed to read config from {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "config_loaded");
        Ok(config)
    }
}
