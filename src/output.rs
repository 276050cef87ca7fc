//! Error rendering for the terminal.

use colored::Colorize;

/// Prints `err` and its cause chain to stderr with a colored `error:` prefix.
pub fn render_error(err: &anyhow::Error) {
    eprintln!("{} {}", "error:".red().bold(), err);
    for cause in err.chain().skip(1) {
        eprintln!("  {} {}", "caused by:".dimmed(), cause);
    }
}
