//! mval - package manifest validator
//!
//! mval checks package manifest files against the rules of their ecosystem and
//! reports every rule violation as a human-readable fault. It supports five
//! manifest formats:
//!
//! | Format    | File name pattern      | Content |
//! |-----------|------------------------|---------|
//! | jQuery    | `*.jquery.json`        | JSON    |
//! | Composer  | `composer.json`        | JSON    |
//! | WordPress | `readme.txt`           | text    |
//! | npm       | `package.json`         | JSON    |
//! | Android   | `AndroidManifest.xml`  | XML     |
//!
//! # Faults versus Errors
//!
//! A validation call either evaluates the manifest and returns a (possibly
//! empty) list of [`core::Fault`]s, or fails with a [`core::MvalError`] because
//! the manifest could not be evaluated at all: unknown type, unreadable file,
//! malformed JSON or XML. An empty fault list means the manifest is valid.
//!
//! # Core Modules
//!
//! - [`validation`] - entry point: resolve the format, load, scan, run the rules
//! - [`validators`] - per-format rule sets and the generic e-mail/URL scanner
//! - [`manifest`] - input kinds, format detection and loading
//! - [`version`] - single-version and npm-style range checks
//! - [`syntax`] - e-mail and URL syntax checks
//! - [`core`] - error types and user-facing error presentation
//! - [`constants`] - fixed tables shared by the validators
//! - [`cli`] - the `mval` command-line front end
//!
//! # Examples
//!
//! ```rust,no_run
//! use mval_cli::validation::validate_path;
//! use std::path::Path;
//!
//! # fn example() -> Result<(), mval_cli::core::MvalError> {
//! let faults = validate_path(Path::new("composer.json"), None)?;
//! if faults.is_empty() {
//!     println!("composer.json is valid");
//! } else {
//!     for fault in &faults {
//!         println!(" * {fault}");
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Validating an in-memory manifest requires an explicit format:
//!
//! ```rust
//! use mval_cli::manifest::ManifestFormat;
//! use mval_cli::validation::validate_value;
//! use serde_json::json;
//!
//! let package = json!({
//!     "name": "left-pad",
//!     "description": "String left pad",
//!     "version": "1.3.0",
//!     "engine": "node >=0.10",
//!     "author": "azer"
//! });
//! assert!(validate_value(&package, ManifestFormat::Npm)?.is_empty());
//! # Ok::<(), mval_cli::core::MvalError>(())
//! ```

pub mod cli;
pub mod constants;
pub mod core;
pub mod manifest;
pub mod syntax;
pub mod validation;
pub mod validators;
pub mod version;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use crate::core::{Fault, MvalError};
pub use crate::manifest::{ManifestFormat, ManifestInput, detect_format};
pub use crate::syntax::{is_valid_email, is_valid_url};
pub use crate::validation::{validate, validate_path, validate_text, validate_value};
pub use crate::version::{is_valid_version, is_valid_version_range};
