//! Centralized model registry for Mistral AI.
//!
//! Maps each known model identifier to its context window size. This is the
//! single source of truth: [`crate::tokens`] (for budget checks) and the
//! `models` / `context` subcommands all consume from here.
//!
//! The table is a `const` slice so iteration order is definition order, which
//! is also the order the names appear in [`UnknownModelError`] messages.

use crate::error::UnknownModelError;

/// Information about a known Mistral model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelInfo {
    /// The model identifier string (e.g., "mistral-large-latest").
    pub name: &'static str,
    /// Context window size in tokens.
    pub context_window: usize,
}

/// Known Mistral AI models.
///
/// Names are matched exactly. `open-mixtral-8x7B` keeps its uppercase `B`,
/// and `mistral-small-2312` is listed separately even though it is the dated
/// name for the same model.
pub const MISTRAL_MODELS: &[ModelInfo] = &[
    ModelInfo {
        name: "open-mistral-7b",
        context_window: 8_000,
    },
    ModelInfo {
        name: "open-mixtral-8x7B",
        context_window: 32_000,
    },
    ModelInfo {
        name: "mistral-small-2312",
        context_window: 32_000,
    },
    ModelInfo {
        name: "mistral-small-latest",
        context_window: 32_000,
    },
    ModelInfo {
        name: "mistral-medium-latest",
        context_window: 32_000,
    },
    ModelInfo {
        name: "mistral-large-latest",
        context_window: 32_000,
    },
];

/// A documented secondary name for a registry entry.
///
/// Purely informational. The registry never resolves `aka` to `name`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelAlias {
    /// Endpoint name as it appears in the registry.
    pub name: &'static str,
    /// Dated name the endpoint is also known by.
    pub aka: &'static str,
    pub note: Option<&'static str>,
}

/// Endpoint aliases as published by Mistral AI on 2024-02-26.
pub const MODEL_ALIASES: &[ModelAlias] = &[
    ModelAlias {
        name: "open-mistral-7b",
        aka: "mistral-tiny-2312",
        note: Some("the mistral-tiny endpoint is deprecated as of May 2024"),
    },
    ModelAlias {
        name: "open-mixtral-8x7b",
        aka: "mistral-small-2312",
        note: Some("the mistral-small endpoint is deprecated as of May 2024"),
    },
    ModelAlias {
        name: "mistral-small-latest",
        aka: "mistral-small-2402",
        note: None,
    },
    ModelAlias {
        name: "mistral-medium-latest",
        aka: "mistral-medium-2312",
        note: Some("the mistral-medium endpoint is deprecated as of May 2024"),
    },
    ModelAlias {
        name: "mistral-large-latest",
        aka: "mistral-large-2402",
        note: Some("flagship model"),
    },
];

/// Returns the context window size for `model_name`.
///
/// The name is matched exactly, with no trimming or case folding.
///
/// # Errors
///
/// Returns [`UnknownModelError`] if `model_name` is not in [`MISTRAL_MODELS`].
/// Its message names the input and lists every known model.
pub fn context_size_for(model_name: &str) -> Result<usize, UnknownModelError> {
    match model_info(model_name) {
        Some(info) => Ok(info.context_window),
        None => {
            tracing::debug!(model = model_name, "unknown model requested");
            Err(UnknownModelError::new(model_name))
        }
    }
}

/// Looks up the registry entry for `model_name`, if any.
pub fn model_info(model_name: &str) -> Option<&'static ModelInfo> {
    MISTRAL_MODELS.iter().find(|info| info.name == model_name)
}

pub fn is_known_model(model_name: &str) -> bool {
    model_info(model_name).is_some()
}

/// Known model names, in definition order.
pub fn known_model_names() -> impl Iterator<Item = &'static str> {
    MISTRAL_MODELS.iter().map(|info| info.name)
}

/// Informational aliases documented for `model_name`.
pub fn aliases_for(model_name: &str) -> impl Iterator<Item = &'static ModelAlias> + '_ {
    MODEL_ALIASES
        .iter()
        .filter(move |alias| alias.name == model_name)
}
