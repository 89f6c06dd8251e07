//! Per-format rule sets.
//!
//! Each submodule implements the rules for one [`ManifestFormat`]. The JSON
//! formats (jQuery, Composer, npm) work on the manifest's top-level object and
//! share the helpers in [`fields`]. The text formats (WordPress, Android) work
//! on raw content and do their own extraction.
//!
//! Validators never stop at the first problem: every rule is evaluated and the
//! faults are concatenated in rule order. A validator only fails with an error
//! when the content cannot be evaluated at all (for example malformed XML).
//!
//! The [`scanner`] is not tied to any format; the entry point in
//! [`validation`](crate::validation) runs it over every structured manifest
//! before dispatching here.

pub mod android;
pub mod composer;
pub mod fields;
pub mod jquery;
pub mod npm;
pub mod scanner;
pub mod wordpress;

use serde_json::{Map, Value};

use crate::core::{Fault, MvalError};
use crate::manifest::{ManifestFormat, ParsedManifest};

/// Run the rule set for `format` against an already parsed manifest.
///
/// `origin` names the manifest in error messages.
///
/// # Errors
///
/// - [`MvalError::InvalidInput`] if the parsed shape does not suit `format`
///   (a non-object JSON value, or structured content for a text format)
/// - [`MvalError::XmlParse`] if an Android manifest is not well-formed
pub fn run_format_rules(
    format: ManifestFormat,
    manifest: &ParsedManifest<'_>,
    origin: &str,
) -> Result<Vec<Fault>, MvalError> {
    match format {
        ManifestFormat::Jquery => Ok(jquery::validate(structured(format, manifest)?)),
        ManifestFormat::Composer => Ok(composer::validate(structured(format, manifest)?)),
        ManifestFormat::Npm => Ok(npm::validate(structured(format, manifest)?)),
        ManifestFormat::Wordpress => Ok(wordpress::validate(text(format, manifest)?)),
        ManifestFormat::Android => {
            android::validate(text(format, manifest)?).map_err(|e| MvalError::XmlParse {
                file: origin.to_string(),
                reason: e.to_string(),
            })
        }
    }
}

fn structured<'m>(
    format: ManifestFormat,
    manifest: &'m ParsedManifest<'_>,
) -> Result<&'m Map<String, Value>, MvalError> {
    let value = manifest.as_value().ok_or_else(|| MvalError::InvalidInput {
        format,
        reason: "expected JSON content".to_string(),
    })?;
    value.as_object().ok_or_else(|| MvalError::InvalidInput {
        format,
        reason: format!("manifest must be a JSON object, found {}", json_kind(value)),
    })
}

fn text<'m>(format: ManifestFormat, manifest: &'m ParsedManifest<'_>) -> Result<&'m str, MvalError> {
    manifest.as_text().ok_or_else(|| MvalError::InvalidInput {
        format,
        reason: "expected text content, got a structured value".to_string(),
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
