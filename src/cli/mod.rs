//! Command-line interface for mval.
//!
//! mval is a single command: `mval [OPTIONS] <FILE>`. Its arguments live in
//! [`validate::ValidateCommand`] and are flattened into [`Cli`] next to the
//! global output flags.
//!
//! # Configuration
//!
//! Flags that affect the process rather than the validation itself
//! (`--verbose`, `--quiet`, `--no-color`) are collected into a [`CliConfig`]
//! by [`Cli::build_config`] and applied once before the command runs. Tests
//! can build a [`CliConfig`] directly and call [`Cli::execute_with_config`].
//!
//! # Examples
//!
//! ```bash
//! # Detect the manifest type from the file name
//! mval package.json
//!
//! # Force a type for an unusually named file
//! mval --type wordpress docs/PLUGIN-README.txt
//!
//! # Machine-readable output with debug logging on stderr
//! mval --format json -v composer.json
//! ```

pub mod validate;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use self::validate::ValidateCommand;

/// Log filter used when neither `--verbose`, `--quiet` nor `RUST_LOG` is given.
const DEFAULT_LOG_LEVEL: &str = "warn";

/// Runtime configuration derived from the global flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Filter directive for the tracing subscriber (`"debug"`, `"warn"`, `"mval_cli=trace"`, ...).
    ///
    /// When `None`, no subscriber is installed and nothing is logged.
    pub log_level: Option<String>,

    /// Whether terminal colors are allowed.
    ///
    /// When `false`, colors are switched off globally even on a terminal.
    pub color: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: Some(DEFAULT_LOG_LEVEL.to_string()),
            color: true,
        }
    }
}

impl CliConfig {
    /// Create a new CLI configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the logging subscriber and the color override.
    ///
    /// Logs are written to stderr so that stdout carries only the report.
    /// Installing a subscriber twice is harmless; the second attempt is ignored.
    pub fn apply(&self) {
        if !self.color {
            colored::control::set_override(false);
        }

        if let Some(level) = &self.log_level {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(EnvFilter::new(level))
                .with_writer(std::io::stderr)
                .with_target(false)
                .try_init();
        }
    }
}

/// Validate package manifests for jQuery, Composer, WordPress, npm and Android.
#[derive(Parser, Debug)]
#[command(
    name = "mval",
    about = "Validate package manifest files",
    version,
    long_about = "mval checks jQuery plugin, Composer, WordPress readme, npm and Android manifests \
                  for missing fields, malformed versions, URLs and e-mail addresses."
)]
pub struct Cli {
    #[command(flatten)]
    validate: ValidateCommand,

    /// Enable verbose output (debug logging on stderr)
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress all logging
    #[arg(short, long)]
    quiet: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

impl Cli {
    /// Build the configuration from the flags and run the command.
    ///
    /// # Errors
    ///
    /// Returns an error if the manifest cannot be evaluated or has faults.
    pub fn execute(self) -> Result<()> {
        let config = self.build_config();
        self.execute_with_config(config)
    }

    /// Translate the global flags into a [`CliConfig`].
    ///
    /// `--verbose` selects `debug`, `--quiet` disables logging, and otherwise
    /// `RUST_LOG` is honored with [`DEFAULT_LOG_LEVEL`] as fallback.
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            Some("debug".to_string())
        } else if self.quiet {
            None
        } else {
            Some(std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string()))
        };

        CliConfig {
            log_level,
            color: !self.no_color,
        }
    }

    /// Run the command with an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the manifest cannot be evaluated or has faults.
    pub fn execute_with_config(self, config: CliConfig) -> Result<()> {
        config.apply();
        self.validate.execute()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal() {
        let cli = Cli::try_parse_from(["mval", "package.json"]).unwrap();
        assert_eq!(cli.validate.file, std::path::PathBuf::from("package.json"));
        assert!(cli.validate.manifest_type.is_none());
        assert_eq!(cli.validate.format, validate::OutputFormat::Text);
    }

    #[test]
    fn test_parse_all_options() {
        let cli = Cli::try_parse_from([
            "mval",
            "-t",
            "Composer",
            "--format",
            "json",
            "--no-color",
            "-v",
            "deps.json",
        ])
        .unwrap();
        assert_eq!(cli.validate.manifest_type.as_deref(), Some("Composer"));
        assert_eq!(cli.validate.format, validate::OutputFormat::Json);

        let config = cli.build_config();
        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert!(!config.color);
    }

    #[test]
    fn test_verbose_and_quiet_conflict() {
        assert!(Cli::try_parse_from(["mval", "-v", "-q", "package.json"]).is_err());
    }

    #[test]
    fn test_file_is_required() {
        assert!(Cli::try_parse_from(["mval"]).is_err());
    }

    #[test]
    fn test_quiet_disables_logging() {
        let cli = Cli::try_parse_from(["mval", "--quiet", "package.json"]).unwrap();
        let config = cli.build_config();
        assert!(config.log_level.is_none());
        assert!(config.color);
    }

    #[test]
    fn test_default_config() {
        let config = CliConfig::new();
        assert_eq!(config.log_level.as_deref(), Some("warn"));
        assert!(config.color);
    }
}
