//! Validate a manifest file and report its faults.
//!
//! This is the only command mval has. It resolves the manifest type (from
//! `--type` or the file name), runs the validation engine and prints either a
//! colored text report or a JSON report.
//!
//! # Output
//!
//! Text, valid manifest:
//! ```text
//! package.json is a valid NPM manifest
//! ```
//!
//! Text, faults found:
//! ```text
//! composer.json is NOT a valid COMPOSER manifest
//!  * Field "description" is missing
//!  * Version number "not-a-version" for "foo/bar" is not a valid version
//! ```
//!
//! # Exit Status
//!
//! - `0`: the manifest is valid
//! - `1`: faults were found, or the manifest could not be evaluated

mod command;
mod executor;
mod results;

pub use command::{OutputFormat, ValidateCommand};
pub use results::ValidationReport;
