//! File loading and merging for configuration.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::types::{default_model, Config, ThresholdConfig};
use crate::error::ConfigError;

impl Config {
    /// Reads and parses a config file. A missing file yields `Ok(None)`.
    pub fn load_file(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(Some(config))
    }

    /// Loads the global config from `~/.config/mistral-context/config.toml`.
    ///
    /// Falls back to defaults when the file does not exist.
    pub(super) fn load_global() -> Result<Self, ConfigError> {
        let path = Self::config_path()?;
        Ok(Self::load_file(&path)?.unwrap_or_default())
    }

    /// Look for `mistral-context.toml` in `start`, then walk up to the git root.
    pub fn find_project_config(start: &Path) -> Option<PathBuf> {
        let mut dir = start.to_path_buf();
        loop {
            let candidate = dir.join(crate::constants::PROJECT_CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            // Stop at git root or filesystem root
            if dir.join(".git").exists() || !dir.pop() {
                return None;
            }
        }
    }

    pub(super) fn load_project(start: &Path) -> Result<Option<Self>, ConfigError> {
        match Self::find_project_config(start) {
            Some(path) => Self::load_file(&path),
            None => Ok(None),
        }
    }

    /// Merge project config over global config.
    /// Project values win when present.
    pub fn merge(global: Config, project: Config) -> Config {
        Config {
            model: if project.model != default_model() {
                project.model
            } else {
                global.model
            },
            thresholds: ThresholdConfig {
                warn: project.thresholds.warn.or(global.thresholds.warn),
                danger: project.thresholds.danger.or(global.thresholds.danger),
            },
        }
    }

    /// Writes a default config file to `path`, creating parent directories.
    ///
    /// Refuses to overwrite an existing file.
    pub fn write_default(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config already exists at {:?}", path);
        }
        let default_toml = format!(
            r#"model = "{}"

[thresholds]
warn = {:.2}
danger = {:.2}
"#,
            default_model(),
            crate::constants::CONTEXT_WARN_THRESHOLD,
            crate::constants::CONTEXT_DANGER_THRESHOLD,
        );
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }
        fs::write(path, default_toml)
            .with_context(|| format!("Failed to write default config to {:?}", path))?;
        tracing::debug!(path = %path.display(), "wrote default config");
        Ok(())
    }
}
