//! mval CLI entry point
//!
//! Parses the command line, validates the given manifest file and maps the
//! outcome to an exit status: `0` when the manifest is valid, `1` when faults
//! were found or the manifest could not be evaluated.

use anyhow::Result;
use clap::Parser;
use mval_cli::cli;
use mval_cli::core::user_friendly_error;

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = cli::Cli::parse();

    // Set up colored output for Windows
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    match cli.execute() {
        Ok(()) => Ok(()),
        Err(e) => {
            // Convert to user-friendly error with context and suggestions
            let error_ctx = user_friendly_error(e);
            error_ctx.display();
            std::process::exit(1);
        }
    }
}
