//! Error types for mistral-context.

use std::path::PathBuf;
use thiserror::Error;

/// Returned when a model name is not in the registry.
///
/// The display text lists every known model so the caller can correct the
/// name without consulting other documentation. The two sentences are joined
/// without a space to match the diagnostic other Mistral integrations emit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "Unknown model: {model}. Please provide a valid MistralAI model name.Known models are: {}",
    .known.join(", ")
)]
pub struct UnknownModelError {
    /// The name that was looked up, verbatim.
    pub model: String,
    /// Every registry name, in definition order.
    pub known: Vec<&'static str>,
}

impl UnknownModelError {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            known: crate::models::known_model_names().collect(),
        }
    }
}

/// Errors from loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read config from {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config at {path:?}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid thresholds: warn={warn}, danger={danger} (need 0 < warn <= danger <= 1)")]
    InvalidThreshold { warn: f64, danger: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_model_message_is_exact() {
        let err = UnknownModelError::new("mistral-tiny");
        assert_eq!(
            err.to_string(),
            "Unknown model: mistral-tiny. Please provide a valid MistralAI model name.\
Known models are: open-mistral-7b, open-mixtral-8x7B, mistral-small-2312, \
mistral-small-latest, mistral-medium-latest, mistral-large-latest"
        );
    }

    #[test]
    fn test_unknown_model_message_keeps_input_verbatim() {
        let err = UnknownModelError::new("  GPT-4 ");
        assert!(err.to_string().starts_with("Unknown model:   GPT-4 . "));
    }

    #[test]
    fn test_threshold_message() {
        let err = ConfigError::InvalidThreshold {
            warn: 0.9,
            danger: 0.5,
        };
        assert!(err.to_string().contains("warn=0.9"));
    }
}
