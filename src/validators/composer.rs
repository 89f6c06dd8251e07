//! Composer (`composer.json`) rules.

use regex::Regex;
use serde_json::{Map, Value};
use std::sync::LazyLock;

use super::fields::{check_keywords, check_version, find_invalid_urls, find_invalid_versions, find_missing_fields};
use crate::constants::URL_FIELDS;
use crate::core::Fault;

const REQUIRED_FIELDS: &[&str] = &["name", "description"];

const DEPENDENCY_FIELDS: &[&str] = &["require", "replace", "require-dev"];

/// `YYYY-MM-DD` or `YYYY-MM-DD HH:MM:SS`
static RELEASE_TIME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}(?: [0-9]{2}:[0-9]{2}:[0-9]{2})?$")
        .unwrap_or_else(|e| panic!("invalid release time pattern: {e}"))
});

/// Validate a parsed `composer.json` object.
pub fn validate(manifest: &Map<String, Value>) -> Vec<Fault> {
    let mut faults = find_missing_fields(REQUIRED_FIELDS, manifest);
    faults.extend(check_keywords(manifest));
    faults.extend(find_invalid_urls(URL_FIELDS, manifest));
    faults.extend(check_release_time(manifest));
    faults.extend(check_version(manifest));
    for field in DEPENDENCY_FIELDS {
        faults.extend(find_invalid_versions(field, manifest));
    }
    faults
}

fn check_release_time(manifest: &Map<String, Value>) -> Option<Fault> {
    let time = manifest.get("time")?;
    if time.as_str().is_some_and(|t| RELEASE_TIME.is_match(t)) {
        return None;
    }
    Some("Field \"time\" does not seem to have a correct date format (YYYY-MM-DD)".to_string())
}
