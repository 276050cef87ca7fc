//! Struct definitions and serde defaults for mistral-context configuration.

use serde::{Deserialize, Serialize};

/// Root configuration, deserialized from `config.toml`.
///
/// Fields use serde defaults so the tool runs with sensible defaults
/// when no config file exists.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Default model identifier (e.g. `"mistral-small-latest"`).
    #[serde(default = "default_model")]
    pub model: String,
    /// Context usage thresholds.
    #[serde(default)]
    pub thresholds: ThresholdConfig,
}

/// Returns the default model identifier (`"mistral-small-latest"`).
///
/// Used by serde's `#[serde(default)]` attribute during deserialization.
pub(super) fn default_model() -> String {
    crate::constants::DEFAULT_MODEL.to_string()
}

/// Usage ratios at which `usage` reports a warning or a critical status.
///
/// Unset values fall back to the constants in [`crate::constants`].
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct ThresholdConfig {
    /// Ratio (0.0–1.0) at which usage is reported as a warning.
    pub warn: Option<f64>,
    /// Ratio (0.0–1.0) at which usage is reported as critical.
    pub danger: Option<f64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: default_model(),
            thresholds: ThresholdConfig::default(),
        }
    }
}
