//! Model listing for the `models` subcommand.
//!
//! Display concerns only; the data comes from [`mistral_context::models`].

use anyhow::Result;
use colored::Colorize;
use serde_json::json;

use mistral_context::models::{aliases_for, MISTRAL_MODELS};
use mistral_context::tokens::format_number;

/// List all known models in registry order, marking `current`.
pub fn print_models(current: &str) {
    println!("Available models:\n");

    let width = MISTRAL_MODELS
        .iter()
        .map(|info| info.name.len())
        .max()
        .unwrap_or(0);

    for info in MISTRAL_MODELS {
        let marker = if info.name == current { " (default)" } else { "" };
        println!(
            "  {:<width$}  {:>7} tokens{}",
            info.name,
            format_number(info.context_window),
            marker.green()
        );
        for alias in aliases_for(info.name) {
            let note = alias.note.map(|n| format!(" -- {n}")).unwrap_or_default();
            println!("  {:<width$}    aka {}{}", "", alias.aka, note.dimmed());
        }
    }
}

/// Print the registry as a JSON array of `{ name, context_window }`.
pub fn print_models_json() -> Result<()> {
    let models: Vec<_> = MISTRAL_MODELS
        .iter()
        .map(|info| {
            json!({
                "name": info.name,
                "context_window": info.context_window,
                "aliases": aliases_for(info.name).map(|a| a.aka).collect::<Vec<_>>(),
            })
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&models)?);
    Ok(())
}
