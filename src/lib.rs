//! Context window sizes for Mistral AI models.
//!
//! The core is [`context_size_for`], an exact-match lookup into the static
//! table in [`models`]. Unknown names fail with [`UnknownModelError`], whose
//! message lists every valid name.
//!
//! ```
//! use mistral_context::context_size_for;
//!
//! assert_eq!(context_size_for("open-mistral-7b").unwrap(), 8000);
//! assert!(context_size_for("mistral-tiny").is_err());
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod tokens;

pub use error::{ConfigError, UnknownModelError};
pub use models::{context_size_for, ModelInfo, MISTRAL_MODELS};
