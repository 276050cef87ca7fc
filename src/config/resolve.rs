//! Environment variable substitution and threshold resolution.

use super::types::Config;
use crate::constants::{CONTEXT_DANGER_THRESHOLD, CONTEXT_WARN_THRESHOLD, MODEL_ENV_VAR};
use crate::error::ConfigError;
use crate::tokens::Thresholds;

impl Config {
    /// Resolve {env:VAR_NAME} patterns in string fields.
    pub(super) fn resolve_substitutions(&mut self) {
        self.model = Self::resolve_str(&self.model);
    }

    /// Replace {env:VAR} with the environment variable value.
    /// Unset variables become empty strings.
    pub(super) fn resolve_str(s: &str) -> String {
        let mut result = s.to_string();
        while let Some(start) = result.find("{env:") {
            if let Some(end) = result[start..].find('}') {
                let var_name = &result[start + 5..start + end];
                let value = std::env::var(var_name).unwrap_or_default();
                result = format!(
                    "{}{}{}",
                    &result[..start],
                    value,
                    &result[start + end + 1..]
                );
            } else {
                break;
            }
        }
        result
    }

    /// `MISTRAL_MODEL` wins over any file value when set and non-empty.
    pub(super) fn apply_env_override(&mut self) {
        if let Ok(model) = std::env::var(MODEL_ENV_VAR) {
            if !model.is_empty() {
                tracing::debug!(model = %model, "model overridden from environment");
                self.model = model;
            }
        }
    }

    /// Effective thresholds, with constants filling unset values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidThreshold`] unless `0 < warn <= danger <= 1`.
    pub fn thresholds(&self) -> Result<Thresholds, ConfigError> {
        let warn = self.thresholds.warn.unwrap_or(CONTEXT_WARN_THRESHOLD);
        let danger = self.thresholds.danger.unwrap_or(CONTEXT_DANGER_THRESHOLD);
        if !(warn > 0.0 && warn <= danger && danger <= 1.0) {
            return Err(ConfigError::InvalidThreshold { warn, danger });
        }
        Ok(Thresholds { warn, danger })
    }
}
