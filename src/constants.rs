//! Centralized constants for mistral-context.
//!
//! Default strings, file names and thresholds live here so they can be
//! changed in one place.

/// Application name used in CLI output and directory paths.
pub const APP_NAME: &str = "mistral-context";

/// Default model identifier when none is configured.
pub const DEFAULT_MODEL: &str = "mistral-small-latest";

/// Configuration filename.
pub const CONFIG_FILENAME: &str = "config.toml";

/// Per-project configuration filename.
pub const PROJECT_CONFIG_FILENAME: &str = "mistral-context.toml";

/// Environment variable that overrides the configured model.
pub const MODEL_ENV_VAR: &str = "MISTRAL_MODEL";

// --- Context window ---

/// Context usage ratio at which a warning is shown (80%).
pub const CONTEXT_WARN_THRESHOLD: f64 = 0.80;

/// Context usage ratio treated as critical (95%).
pub const CONTEXT_DANGER_THRESHOLD: f64 = 0.95;

// --- Logging ---

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "mistral_context=warn";

/// Filter used with `--verbose`.
pub const VERBOSE_LOG_FILTER: &str = "mistral_context=debug";
