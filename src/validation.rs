//! Validation entry point.
//!
//! [`validate`] accepts any [`ManifestInput`] plus an optional format and
//! returns the list of faults found. The steps are always the same:
//!
//! 1. **Resolve the format**: explicit format wins; file inputs fall back to
//!    [`detect_format`] on the path; in-memory inputs require an explicit format.
//! 2. **Load**: read and parse the file, or wrap the in-memory value or text.
//! 3. **Scan**: for JSON formats, [`scan_for_invalid_values`] runs over the
//!    whole tree first.
//! 4. **Format rules**: the rule set for the format runs and its faults are
//!    appended after the scanner's.
//!
//! An empty fault list means the manifest is valid. Any failure to get as far
//! as evaluating rules is an [`MvalError`], never a fault.
//!
//! # Examples
//!
//! ```rust
//! use mval_cli::manifest::ManifestFormat;
//! use mval_cli::validation::validate_value;
//! use serde_json::json;
//!
//! let manifest = json!({
//!     "name": "acme/widgets",
//!     "description": "Widgets for everyone",
//!     "version": "1.0.0",
//!     "require": {"php": ">=7.4"}
//! });
//! let faults = validate_value(&manifest, ManifestFormat::Composer)?;
//! assert!(faults.is_empty());
//!
//! let faults = validate_value(&json!({"name": "acme/widgets", "version": "1.0.0"}), ManifestFormat::Composer)?;
//! assert_eq!(faults, vec!["Field \"description\" is missing"]);
//! # Ok::<(), mval_cli::core::MvalError>(())
//! ```

use serde_json::Value;
use std::borrow::Cow;
use std::path::Path;
use tracing::debug;

use crate::core::{Fault, MvalError};
use crate::manifest::{
    IN_MEMORY_ORIGIN, ManifestFormat, ManifestInput, ParsedManifest, detect_format, load_manifest,
    parse_content,
};
use crate::validators::run_format_rules;
use crate::validators::scanner::scan_for_invalid_values;

/// Validate a manifest given as a path, a JSON value or serialized text.
///
/// # Errors
///
/// - [`MvalError::FormatRequired`] for in-memory input without a format
/// - [`MvalError::FormatUndetectable`] when a path matches no known file name
/// - any error from [`validate_path`], [`validate_value`] or [`validate_text`]
pub fn validate(input: ManifestInput<'_>, format: Option<ManifestFormat>) -> Result<Vec<Fault>, MvalError> {
    match input {
        ManifestInput::Path(path) => validate_path(path, format),
        ManifestInput::Value(value) => validate_value(value, format.ok_or(MvalError::FormatRequired)?),
        ManifestInput::Text(text) => validate_text(text, format.ok_or(MvalError::FormatRequired)?),
    }
}

/// Validate the manifest file at `path`, detecting the format from its name
/// unless one is given.
///
/// # Errors
///
/// - [`MvalError::FormatUndetectable`] when no format is given and none can be detected
/// - [`MvalError::NotAFile`], [`MvalError::FileRead`] when the file cannot be read
/// - [`MvalError::JsonParse`], [`MvalError::XmlParse`] for malformed content
/// - [`MvalError::InvalidInput`] when a JSON manifest is not an object
pub fn validate_path(path: &Path, format: Option<ManifestFormat>) -> Result<Vec<Fault>, MvalError> {
    let format = resolve_format(path, format)?;
    let origin = path.display().to_string();
    let manifest = load_manifest(path, format)?;
    validate_parsed(&manifest, format, &origin)
}

/// Pick the format for the file at `path`: `format` if given, else the one detected from its name.
///
/// # Errors
///
/// Returns [`MvalError::FormatUndetectable`] when no format is given and the
/// path matches no known manifest file name.
pub fn resolve_format(path: &Path, format: Option<ManifestFormat>) -> Result<ManifestFormat, MvalError> {
    if let Some(format) = format {
        return Ok(format);
    }
    let name = path.display().to_string();
    detect_format(&name).ok_or(MvalError::FormatUndetectable {
        path: name,
    })
}

/// Validate an already parsed JSON manifest.
///
/// Only the JSON formats (jQuery, Composer, npm) accept a value.
///
/// # Errors
///
/// Returns [`MvalError::InvalidInput`] if `format` is a text format or `value`
/// is not a JSON object.
pub fn validate_value(value: &Value, format: ManifestFormat) -> Result<Vec<Fault>, MvalError> {
    if !format.is_structured() {
        return Err(MvalError::InvalidInput {
            format,
            reason: "expected text content, got a structured value".to_string(),
        });
    }
    validate_parsed(&ParsedManifest::Structured(Cow::Borrowed(value)), format, IN_MEMORY_ORIGIN)
}

/// Validate serialized manifest content held in memory.
///
/// JSON formats parse `text` first; text formats validate it as is.
///
/// # Errors
///
/// - [`MvalError::JsonParse`], [`MvalError::XmlParse`] for malformed content
/// - [`MvalError::InvalidInput`] when a JSON manifest is not an object
pub fn validate_text(text: &str, format: ManifestFormat) -> Result<Vec<Fault>, MvalError> {
    let manifest = parse_content(Cow::Borrowed(text), format, IN_MEMORY_ORIGIN)?;
    validate_parsed(&manifest, format, IN_MEMORY_ORIGIN)
}

fn validate_parsed(
    manifest: &ParsedManifest<'_>,
    format: ManifestFormat,
    origin: &str,
) -> Result<Vec<Fault>, MvalError> {
    debug!("Validating {} manifest from {}", format, origin);

    let mut faults = match manifest.as_value() {
        Some(value) if value.is_object() => scan_for_invalid_values(value),
        _ => Vec::new(),
    };
    faults.extend(run_format_rules(format, manifest, origin)?);

    debug!("Found {} fault(s) in {}", faults.len(), origin);
    Ok(faults)
}
