//! Context budget helpers for mistral-context.
//!
//! Builds on the registry in [`crate::models`] so callers can check how much
//! of a model's context window a request would use before sending it.

use crate::constants::{CONTEXT_DANGER_THRESHOLD, CONTEXT_WARN_THRESHOLD};
use crate::error::UnknownModelError;
use crate::models::context_size_for;

/// Usage ratios at which a request is flagged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub warn: f64,
    pub danger: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            warn: CONTEXT_WARN_THRESHOLD,
            danger: CONTEXT_DANGER_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextStatus {
    Ok { used: usize, limit: usize },
    Warning { used: usize, limit: usize, percent: u8 },
    Critical { used: usize, limit: usize, percent: u8 },
}

impl ContextStatus {
    pub fn limit(&self) -> usize {
        match *self {
            Self::Ok { limit, .. }
            | Self::Warning { limit, .. }
            | Self::Critical { limit, .. } => limit,
        }
    }
}

/// Classifies `used` tokens against `model`'s context window.
///
/// # Errors
///
/// Returns [`UnknownModelError`] if `model` is not in the registry.
pub fn check_context_usage(
    used: usize,
    model: &str,
    thresholds: Thresholds,
) -> Result<ContextStatus, UnknownModelError> {
    let limit = context_size_for(model)?;
    Ok(classify(used, limit, thresholds))
}

fn classify(used: usize, limit: usize, thresholds: Thresholds) -> ContextStatus {
    let ratio = used as f64 / limit as f64;
    // Saturates at 255 for wildly oversized requests.
    let percent = (ratio * 100.0).min(u8::MAX as f64) as u8;
    if ratio >= thresholds.danger {
        ContextStatus::Critical { used, limit, percent }
    } else if ratio >= thresholds.warn {
        ContextStatus::Warning { used, limit, percent }
    } else {
        ContextStatus::Ok { used, limit }
    }
}

/// Tokens left in `model`'s window after `used`, floored at zero.
pub fn remaining_tokens(used: usize, model: &str) -> Result<usize, UnknownModelError> {
    Ok(context_size_for(model)?.saturating_sub(used))
}

/// Format a token count for display. Example: "1,234 / 32,000"
pub fn format_token_usage(used: usize, limit: usize) -> String {
    format!("{} / {}", format_number(used), format_number(limit))
}

pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}
