//! XDG path resolution for the configuration directory.

use std::path::PathBuf;

use super::types::Config;
use crate::error::ConfigError;

impl Config {
    /// Returns the platform-specific configuration directory.
    ///
    /// Returns `~/.config/mistral-context/` on Linux (`XDG_CONFIG_HOME/mistral-context`).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoConfigDir`] if the platform's config directory
    /// cannot be determined.
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        let dir = dirs::config_dir()
            .ok_or(ConfigError::NoConfigDir)?
            .join(crate::constants::APP_NAME);
        Ok(dir)
    }

    /// Returns the full path to the global configuration file.
    ///
    /// Returns `~/.config/mistral-context/config.toml` on Linux.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        Ok(Self::config_dir()?.join(crate::constants::CONFIG_FILENAME))
    }
}
