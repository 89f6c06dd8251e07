//! Field-level checks shared by the JSON format validators.
//!
//! Every helper takes the manifest's top-level object and returns the faults
//! it found, so validators can chain them with `extend` and keep evaluating
//! after earlier rules fail.

use serde_json::{Map, Value};
use std::borrow::Cow;

use crate::core::Fault;
use crate::syntax::is_valid_url;
use crate::version::{is_valid_version, is_valid_version_range};

/// Render a JSON value for a fault message: strings verbatim, anything else as JSON.
pub(crate) fn display_value(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s),
        other => Cow::Owned(other.to_string()),
    }
}

/// One `Field "<name>" is missing` fault per absent field, in the given order.
pub fn find_missing_fields(fields: &[&str], manifest: &Map<String, Value>) -> Vec<Fault> {
    fields
        .iter()
        .filter(|field| !manifest.contains_key(**field))
        .map(|field| format!("Field \"{field}\" is missing"))
        .collect()
}

/// Check that each listed field, when present and non-empty, holds a valid URL.
///
/// Objects (`"bugs": {"url": ...}`) are left to the scanner, which checks
/// their nested `url`.
pub fn find_invalid_urls(fields: &[&str], manifest: &Map<String, Value>) -> Vec<Fault> {
    fields
        .iter()
        .filter(|field| match manifest.get(**field) {
            None | Some(Value::Null | Value::Object(_)) => false,
            Some(Value::String(url)) => !url.is_empty() && !is_valid_url(url),
            Some(_) => true,
        })
        .map(|field| format!("Field \"{field}\" contains invalid url"))
        .collect()
}

/// Check every entry of a dependency map (`dependencies`, `require`, ...) for a valid range.
///
/// An absent field yields nothing. A field that is not an object yields a
/// single shape fault.
pub fn find_invalid_versions(field: &str, manifest: &Map<String, Value>) -> Vec<Fault> {
    let Some(value) = manifest.get(field) else {
        return Vec::new();
    };
    let Some(dependencies) = value.as_object() else {
        return vec![format!("Field \"{field}\" has to be an object")];
    };

    dependencies
        .iter()
        .filter(|(_, constraint)| !constraint.as_str().is_some_and(is_valid_version_range))
        .map(|(name, constraint)| {
            format!(
                "Version number \"{}\" for \"{}\" is not a valid version",
                display_value(constraint),
                name
            )
        })
        .collect()
}

/// Check the `version` field for a valid single version. An absent field is a fault.
pub fn check_version(manifest: &Map<String, Value>) -> Option<Fault> {
    let valid = manifest.get("version").and_then(Value::as_str).is_some_and(is_valid_version);
    (!valid).then(|| "Field \"version\" does not have a valid version".to_string())
}

/// Like [`check_version`], but an absent field is left to the required-field check.
pub fn check_version_if_present(manifest: &Map<String, Value>) -> Option<Fault> {
    manifest.get("version")?;
    check_version(manifest)
}

/// Check that `keywords`, when present, is an array.
pub fn check_keywords(manifest: &Map<String, Value>) -> Option<Fault> {
    match manifest.get("keywords") {
        Some(keywords) if !keywords.is_array() => {
            Some("Field \"keywords\" has to be an array".to_string())
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn test_find_missing_fields() {
        let manifest = object(json!({"name": "x", "title": null}));
        let faults = find_missing_fields(&["name", "title", "author", "licenses"], &manifest);
        assert_eq!(faults, vec!["Field \"author\" is missing", "Field \"licenses\" is missing"]);
    }

    #[test]
    fn test_find_invalid_urls() {
        let manifest = object(json!({
            "homepage": "https://example.com",
            "demo": "not a url",
            "bugs": "",
        }));
        assert_eq!(
            find_invalid_urls(&["homepage", "demo", "bugs", "docs"], &manifest),
            vec!["Field \"demo\" contains invalid url"]
        );

        let manifest = object(json!({"bugs": {"url": "https://example.com/issues"}, "demo": null}));
        assert!(find_invalid_urls(&["bugs", "demo"], &manifest).is_empty());

        let manifest = object(json!({"homepage": ["https://example.com"], "demo": 42}));
        assert_eq!(
            find_invalid_urls(&["homepage", "demo"], &manifest),
            vec!["Field \"homepage\" contains invalid url", "Field \"demo\" contains invalid url"]
        );
    }

    #[test]
    fn test_find_invalid_versions() {
        let manifest = object(json!({
            "require": {
                "php": ">=5.3.0",
                "foo": "not-a-version",
                "bar": "dev-master",
                "baz": 3,
            }
        }));
        let faults = find_invalid_versions("require", &manifest);
        assert_eq!(
            faults,
            vec![
                "Version number \"not-a-version\" for \"foo\" is not a valid version",
                "Version number \"3\" for \"baz\" is not a valid version",
            ]
        );
        assert!(find_invalid_versions("require-dev", &manifest).is_empty());
    }

    #[test]
    fn test_find_invalid_versions_wrong_shape() {
        let manifest = object(json!({"dependencies": ["jquery"]}));
        assert_eq!(
            find_invalid_versions("dependencies", &manifest),
            vec!["Field \"dependencies\" has to be an object"]
        );
    }

    #[test]
    fn test_check_version() {
        assert!(check_version(&object(json!({"version": "1.0.0"}))).is_none());
        assert!(check_version(&object(json!({"version": "dev-master"}))).is_none());
        assert!(check_version(&object(json!({"version": "1.0"}))).is_some());
        assert!(check_version(&object(json!({"version": 1}))).is_some());
        assert_eq!(
            check_version(&object(json!({}))).as_deref(),
            Some("Field \"version\" does not have a valid version")
        );
    }

    #[test]
    fn test_check_version_if_present() {
        assert!(check_version_if_present(&object(json!({}))).is_none());
        assert!(check_version_if_present(&object(json!({"version": "2.0.0"}))).is_none());
        assert!(check_version_if_present(&object(json!({"version": "latest"}))).is_some());
        assert!(check_version_if_present(&object(json!({"version": null}))).is_some());
    }

    #[test]
    fn test_check_keywords() {
        assert!(check_keywords(&object(json!({"keywords": ["a", "b"]}))).is_none());
        assert!(check_keywords(&object(json!({}))).is_none());
        assert_eq!(
            check_keywords(&object(json!({"keywords": "a, b"}))).as_deref(),
            Some("Field \"keywords\" has to be an array")
        );
    }
}
