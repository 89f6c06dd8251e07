//! Manifest inputs, formats and loading.
//!
//! A validation call starts from a [`ManifestInput`] supplied by the caller and
//! turns it into a [`ParsedManifest`] for exactly one [`ManifestFormat`]:
//!
//! - **JSON formats** (jQuery, Composer, npm) become a structured
//!   [`serde_json::Value`]. Key order is preserved, so faults come out in
//!   document order.
//! - **Text formats** (WordPress readme, Android XML) stay raw text. Their
//!   validators do their own extraction.
//!
//! # Examples
//!
//! ```rust,no_run
//! use mval_cli::manifest::{ManifestFormat, ParsedManifest, load_manifest};
//! use std::path::Path;
//!
//! # fn example() -> Result<(), mval_cli::core::MvalError> {
//! let parsed = load_manifest(Path::new("package.json"), ManifestFormat::Npm)?;
//! assert!(matches!(parsed, ParsedManifest::Structured(_)));
//! # Ok(())
//! # }
//! ```

mod format;

pub use format::{ManifestFormat, detect_format};

use serde_json::Value;
use std::borrow::Cow;
use std::path::Path;

use crate::core::MvalError;

/// Placeholder used in error messages for content that did not come from a file.
pub const IN_MEMORY_ORIGIN: &str = "<input>";

/// What the caller hands to [`validate`](crate::validation::validate).
///
/// The input is borrowed for the duration of the call and never modified.
#[derive(Debug, Clone, Copy)]
pub enum ManifestInput<'a> {
    /// A path to a manifest file on disk
    Path(&'a Path),
    /// An already-parsed JSON manifest
    Value(&'a Value),
    /// Serialized manifest content held in memory
    Text(&'a str),
}

impl<'a> From<&'a Path> for ManifestInput<'a> {
    fn from(path: &'a Path) -> Self {
        Self::Path(path)
    }
}

impl<'a> From<&'a Value> for ManifestInput<'a> {
    fn from(value: &'a Value) -> Self {
        Self::Value(value)
    }
}

/// A manifest ready to be handed to a format validator.
#[derive(Debug, Clone)]
pub enum ParsedManifest<'a> {
    /// Parsed JSON content
    Structured(Cow<'a, Value>),
    /// Raw text content (readme or XML)
    Text(Cow<'a, str>),
}

impl ParsedManifest<'_> {
    /// The structured value, if this manifest is JSON.
    #[must_use]
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Self::Structured(value) => Some(&**value),
            Self::Text(_) => None,
        }
    }

    /// The raw text, if this manifest is a text format.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Structured(_) => None,
            Self::Text(text) => Some(&**text),
        }
    }
}

/// Parse serialized `content` the way `format` requires.
///
/// JSON formats are parsed with `serde_json`; text formats are passed through.
/// `origin` names the content in error messages (a file path or
/// [`IN_MEMORY_ORIGIN`]).
///
/// # Errors
///
/// Returns [`MvalError::JsonParse`] when a JSON format's content is not valid JSON.
pub fn parse_content<'a>(
    content: Cow<'a, str>,
    format: ManifestFormat,
    origin: &str,
) -> Result<ParsedManifest<'a>, MvalError> {
    if !format.is_structured() {
        return Ok(ParsedManifest::Text(content));
    }

    let value: Value = serde_json::from_str(&content).map_err(|e| MvalError::JsonParse {
        file: origin.to_string(),
        reason: e.to_string(),
    })?;
    Ok(ParsedManifest::Structured(Cow::Owned(value)))
}

/// Read and parse the manifest file at `path` as `format`.
///
/// # Errors
///
/// - [`MvalError::NotAFile`] if `path` is not a regular file
/// - [`MvalError::FileRead`] if the file cannot be read as UTF-8 text
/// - [`MvalError::JsonParse`] if a JSON format's content is malformed
pub fn load_manifest(path: &Path, format: ManifestFormat) -> Result<ParsedManifest<'static>, MvalError> {
    let origin = path.display().to_string();
    if !path.is_file() {
        return Err(MvalError::NotAFile {
            path: origin,
        });
    }

    let content = std::fs::read_to_string(path).map_err(|source| MvalError::FileRead {
        path: origin.clone(),
        source,
    })?;
    tracing::debug!("read {} bytes from {}", content.len(), origin);

    parse_content(Cow::Owned(content), format, &origin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_parse_content_json() {
        let parsed = parse_content(Cow::Borrowed(r#"{"name": "x"}"#), ManifestFormat::Npm, IN_MEMORY_ORIGIN)
            .unwrap();
        assert_eq!(parsed.as_value(), Some(&json!({"name": "x"})));
        assert!(parsed.as_text().is_none());
    }

    #[test]
    fn test_parse_content_text_passthrough() {
        let parsed =
            parse_content(Cow::Borrowed("=== Plugin ==="), ManifestFormat::Wordpress, IN_MEMORY_ORIGIN)
                .unwrap();
        assert_eq!(parsed.as_text(), Some("=== Plugin ==="));

        // XML is not parsed at load time
        let parsed = parse_content(Cow::Borrowed("<broken"), ManifestFormat::Android, IN_MEMORY_ORIGIN)
            .unwrap();
        assert_eq!(parsed.as_text(), Some("<broken"));
    }

    #[test]
    fn test_parse_content_malformed_json() {
        let err = parse_content(Cow::Borrowed("{ nope"), ManifestFormat::Composer, "composer.json")
            .unwrap_err();
        match err {
            MvalError::JsonParse {
                file,
                ..
            } => assert_eq!(file, "composer.json"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_json_key_order_is_preserved() {
        let parsed =
            parse_content(Cow::Borrowed(r#"{"zeta": 1, "alpha": 2, "mid": 3}"#), ManifestFormat::Npm, "x")
                .unwrap();
        let keys: Vec<&str> =
            parsed.as_value().unwrap().as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_load_manifest_reads_file() {
        crate::test_utils::init_test_logging(Some(tracing::Level::DEBUG));
        let dir = tempdir().unwrap();
        let path = dir.path().join("package.json");
        fs::write(&path, r#"{"name": "demo"}"#).unwrap();

        let parsed = load_manifest(&path, ManifestFormat::Npm).unwrap();
        assert_eq!(parsed.as_value().unwrap()["name"], "demo");
    }

    #[test]
    fn test_load_manifest_rejects_missing_and_directories() {
        let dir = tempdir().unwrap();

        let err = load_manifest(&dir.path().join("missing.json"), ManifestFormat::Npm).unwrap_err();
        assert!(matches!(err, MvalError::NotAFile { .. }));

        let err = load_manifest(dir.path(), ManifestFormat::Npm).unwrap_err();
        assert!(matches!(err, MvalError::NotAFile { .. }));
    }
}
