//! Entry point for mistral-context.
//!
//! Loads environment variables, installs the log subscriber, parses CLI
//! arguments via [`cli`], and dispatches to the chosen subcommand.

mod cli;
mod output;

use mistral_context::constants::{DEFAULT_LOG_FILTER, VERBOSE_LOG_FILTER};
use tracing_subscriber::EnvFilter;

fn main() {
    dotenvy::dotenv().ok();
    let cli = cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = cli::run(cli) {
        output::render_error(&err);
        std::process::exit(1);
    }
}

/// `RUST_LOG` wins; otherwise `--verbose` picks between the two defaults.
fn init_tracing(verbose: bool) {
    let fallback = if verbose {
        VERBOSE_LOG_FILTER
    } else {
        DEFAULT_LOG_FILTER
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_writer(std::io::stderr)
        .init();
}
