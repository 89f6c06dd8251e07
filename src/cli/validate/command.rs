//! Command structure and output format definitions for validation.

use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// Arguments of the `mval` command: validate one manifest file.
///
/// The manifest type is detected from the file name unless `--type` is given.
/// Detection recognizes `*.jquery.json`, `composer.json`, `readme.txt`,
/// `package.json` and `AndroidManifest.xml` anywhere in the path.
///
/// # Examples
///
/// ```rust,ignore
/// use mval_cli::cli::validate::{OutputFormat, ValidateCommand};
///
/// // Detect the type from the file name
/// let cmd = ValidateCommand {
///     file: "package.json".into(),
///     manifest_type: None,
///     format: OutputFormat::Text,
/// };
///
/// // A readme with an unusual name, reported as JSON for CI
/// let cmd = ValidateCommand {
///     file: "docs/PLUGIN-README.txt".into(),
///     manifest_type: Some("wordpress".to_string()),
///     format: OutputFormat::Json,
/// };
/// ```
#[derive(Args, Debug)]
pub struct ValidateCommand {
    /// Manifest file to validate
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Manifest type: jquery, composer, wordpress, npm or android
    ///
    /// Case-insensitive. When omitted, the type is detected from the file name.
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub manifest_type: Option<String>,

    /// Output format for the validation report
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Output format for validation results.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable, colored output
    Text,
    /// A single JSON object for scripts and CI
    Json,
}
