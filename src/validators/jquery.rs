//! jQuery plugin (`<plugin>.jquery.json`) rules.

use serde_json::{Map, Value};

use super::fields::{check_keywords, check_version, find_invalid_urls, find_invalid_versions, find_missing_fields};
use crate::constants::URL_FIELDS;
use crate::core::Fault;

const REQUIRED_FIELDS: &[&str] = &["name", "title", "author", "licenses", "dependencies"];

/// Validate a parsed jQuery plugin manifest object.
pub fn validate(manifest: &Map<String, Value>) -> Vec<Fault> {
    let mut faults = find_missing_fields(REQUIRED_FIELDS, manifest);
    faults.extend(check_name(manifest));
    faults.extend(check_licenses(manifest));
    faults.extend(check_version(manifest));
    faults.extend(find_invalid_versions("dependencies", manifest));
    faults.extend(find_invalid_versions("devDependencies", manifest));
    faults.extend(find_invalid_urls(URL_FIELDS, manifest));
    faults.extend(check_keywords(manifest));
    faults
}

/// The plugin registry already namespaces everything under jQuery.
fn check_name(manifest: &Map<String, Value>) -> Option<Fault> {
    let name = manifest.get("name")?.as_str()?;
    name.to_lowercase().contains("jquery").then(|| "Name is not allowed to contain \"jQuery\"".to_string())
}

fn check_licenses(manifest: &Map<String, Value>) -> Option<Fault> {
    let licenses = manifest.get("licenses")?;
    let missing = match licenses {
        Value::Array(items) => items.first().is_none_or(is_blank),
        other => is_blank(other),
    };
    missing.then(|| "Licenses is missing".to_string())
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn run(value: Value) -> Vec<Fault> {
        validate(value.as_object().unwrap())
    }

    fn valid() -> Value {
        json!({
            "name": "color",
            "title": "jQuery Color",
            "author": {"name": "jQuery Foundation", "url": "https://github.com/jquery"},
            "licenses": [{"type": "MIT", "url": "https://example.com/MIT-LICENSE.txt"}],
            "dependencies": {"jquery": ">=1.5.1"},
            "version": "2.0.0-beta.1",
            "homepage": "https://github.com/jquery/jquery-color",
            "keywords": ["color", "animation"],
        })
    }

    #[test]
    fn test_valid_jquery_manifest() {
        assert!(run(valid()).is_empty());
    }

    #[test]
    fn test_name_must_not_contain_jquery() {
        for name in ["jquery-color", "my.jQuery.plugin", "JQUERY"] {
            let mut manifest = valid();
            manifest["name"] = json!(name);
            assert_eq!(run(manifest), vec!["Name is not allowed to contain \"jQuery\""]);
        }
    }

    #[test]
    fn test_licenses() {
        for blank in [json!([]), json!([""]), json!([{}]), json!(""), json!(null)] {
            let mut manifest = valid();
            manifest["licenses"] = blank.clone();
            assert_eq!(run(manifest), vec!["Licenses is missing"], "licenses: {blank}");
        }

        let mut manifest = valid();
        manifest["licenses"] = json!("MIT");
        assert!(run(manifest).is_empty());
    }

    #[test]
    fn test_version_is_always_checked() {
        let mut manifest = valid();
        manifest.as_object_mut().unwrap().remove("version");
        assert_eq!(run(manifest), vec!["Field \"version\" does not have a valid version"]);

        let mut manifest = valid();
        manifest["version"] = json!("dev-master");
        assert!(run(manifest).is_empty());
    }

    #[test]
    fn test_bugs_object_is_not_a_url_field() {
        let mut manifest = valid();
        manifest["bugs"] = json!({"url": "https://github.com/jquery/jquery-color/issues"});
        assert!(run(manifest).is_empty());
    }

    #[test]
    fn test_fault_order() {
        let faults = run(json!({
            "name": "jquery.thing",
            "licenses": [],
            "version": "1",
            "dependencies": {"jquery": "one"},
            "devDependencies": "none",
            "bugs": "nowhere",
            "keywords": "a",
        }));
        assert_eq!(
            faults,
            vec![
                "Field \"title\" is missing",
                "Field \"author\" is missing",
                "Name is not allowed to contain \"jQuery\"",
                "Licenses is missing",
                "Field \"version\" does not have a valid version",
                "Version number \"one\" for \"jquery\" is not a valid version",
                "Field \"devDependencies\" has to be an object",
                "Field \"bugs\" contains invalid url",
                "Field \"keywords\" has to be an array",
            ]
        );
    }
}
