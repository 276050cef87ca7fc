//! Command-line interface definition and dispatch for mistral-context.
//!
//! Uses [`clap`] for argument parsing with derive macros. Each subcommand is
//! routed to its handler; model listing lives in the [`listing`] submodule.

mod listing;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;

use mistral_context::config::Config;
use mistral_context::models::context_size_for;
use mistral_context::tokens::{self, ContextStatus};

/// Top-level CLI structure.
#[derive(Parser, Debug)]
#[command(
    name = "mistral-context",
    about = "Context window sizes for Mistral AI models"
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
///
/// The `///` doc comments on variants double as `--help` text rendered by clap.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List known models and their context windows
    Models {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the context window of a model
    Context {
        /// Model name (defaults to the configured model)
        model: Option<String>,
    },
    /// Check a token count against a model's context window
    Usage {
        /// Number of tokens the request would use
        tokens: usize,
        /// Model to check against (overrides config)
        #[arg(short, long)]
        model: Option<String>,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Subcommands for the `config` command.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the effective config
    Show,
    /// Print the global config file path
    Path,
    /// Write a default global config file
    Init,
}

/// Parses command-line arguments into a [`Cli`] struct.
///
/// Delegates to [`clap::Parser::parse`], which exits the process on invalid input.
pub fn parse() -> Cli {
    Cli::parse()
}

/// Dispatches the parsed CLI command to its handler.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Models { json } => {
            let config = Config::load()?;
            if json {
                listing::print_models_json()
            } else {
                listing::print_models(&config.model);
                Ok(())
            }
        }
        Commands::Context { model } => {
            let config = Config::load()?;
            let model = model.unwrap_or(config.model);
            let size = context_size_for(&model)?;
            println!("{size}");
            Ok(())
        }
        Commands::Usage { tokens: used, model } => {
            let config = Config::load()?;
            let thresholds = config.thresholds()?;
            let model = model.unwrap_or(config.model);
            let status = tokens::check_context_usage(used, &model, thresholds)?;
            print_status(&model, &status);
            Ok(())
        }
        Commands::Config { action } => {
            match action {
                ConfigAction::Show => {
                    let config = Config::load()?;
                    let path = Config::config_path()?;
                    println!("{} {}", "Config path:".bold(), path.display());
                    println!();
                    let toml_str = toml::to_string_pretty(&config)?;
                    println!("{}", toml_str);
                }
                ConfigAction::Path => {
                    println!("{}", Config::config_path()?.display());
                }
                ConfigAction::Init => {
                    let path = Config::config_path()?;
                    Config::write_default(&path)?;
                    println!("{} {}", "Wrote".green().bold(), path.display());
                }
            }
            Ok(())
        }
    }
}

fn print_status(model: &str, status: &ContextStatus) {
    let label = format!("[model: {}]", model.yellow());
    match *status {
        ContextStatus::Ok { used, limit } => {
            println!(
                "{} {} {}",
                "ok".green().bold(),
                tokens::format_token_usage(used, limit),
                label
            );
        }
        ContextStatus::Warning {
            used,
            limit,
            percent,
        } => {
            println!(
                "{} {} ({percent}%) {}",
                "warning".yellow().bold(),
                tokens::format_token_usage(used, limit),
                label
            );
        }
        ContextStatus::Critical {
            used,
            limit,
            percent,
        } => {
            println!(
                "{} {} ({percent}%) {}",
                "critical".red().bold(),
                tokens::format_token_usage(used, limit),
                label
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_context() {
        let cli = Cli::try_parse_from(["mistral-context", "context", "open-mistral-7b"]).unwrap();
        match cli.command {
            Commands::Context { model } => assert_eq!(model.as_deref(), Some("open-mistral-7b")),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_usage_with_model() {
        let cli = Cli::try_parse_from([
            "mistral-context",
            "-v",
            "usage",
            "4000",
            "--model",
            "mistral-large-latest",
        ])
        .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Usage { tokens, model } => {
                assert_eq!(tokens, 4000);
                assert_eq!(model.as_deref(), Some("mistral-large-latest"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_usage_rejects_negative() {
        assert!(Cli::try_parse_from(["mistral-context", "usage", "-5"]).is_err());
    }
}
