//! Configuration types and path resolution for mistral-context.
//!
//! Settings are stored as TOML at the platform's XDG config path
//! (e.g. `~/.config/mistral-context/config.toml` on Linux), optionally
//! overridden by a `mistral-context.toml` found in the current project.

mod loader;
mod paths;
mod resolve;
mod types;

pub use types::{Config, ThresholdConfig};

use anyhow::{Context, Result};
use std::path::Path;

impl Config {
    /// Load config with precedence: env > project > global > defaults.
    pub fn load() -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to read current directory")?;
        let global = Self::load_global()?;
        Ok(Self::load_layered(global, &cwd)?)
    }

    /// Layers the project config found from `project_start` over `global`,
    /// then applies substitutions and the environment override.
    pub fn load_layered(
        global: Config,
        project_start: &Path,
    ) -> Result<Self, crate::error::ConfigError> {
        let mut config = global;
        if let Some(proj) = Self::load_project(project_start)? {
            config = Self::merge(config, proj);
        }

        config.resolve_substitutions();
        config.apply_env_override();
        config.thresholds()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests;
