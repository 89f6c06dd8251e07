//! npm (`package.json`) rules.

use serde_json::{Map, Value};

use super::fields::{check_version_if_present, find_invalid_versions, find_missing_fields};
use crate::core::Fault;
use crate::version::is_valid_version_range;

const REQUIRED_FIELDS: &[&str] = &["name", "description", "version", "engine", "author"];

/// Validate a parsed `package.json` object.
pub fn validate(manifest: &Map<String, Value>) -> Vec<Fault> {
    let mut faults = find_missing_fields(REQUIRED_FIELDS, manifest);
    faults.extend(find_invalid_versions("dependencies", manifest));
    faults.extend(find_invalid_versions("devDependencies", manifest));
    faults.extend(check_engine(manifest));
    faults.extend(check_version_if_present(manifest));
    faults
}

/// `engine` reads `<name> <range>`, e.g. `node >=0.8`. Only the range part is checked.
fn check_engine(manifest: &Map<String, Value>) -> Option<Fault> {
    let valid = match manifest.get("engine")? {
        Value::String(engine) if engine.is_empty() => true,
        Value::String(engine) => {
            let range = engine.split_once(' ').map_or(engine.as_str(), |(_, range)| range);
            is_valid_version_range(range.trim())
        }
        _ => false,
    };
    (!valid).then(|| "Field \"engine\" does not have a valid version".to_string())
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
            "name": "left-pad",
            "description": "Pad strings on the left",
            "version": "1.3.0",
            "engine": "node >=0.10",
            "author": "Someone <someone@example.com>",
            "dependencies": {"lodash": "^4.17.0", "debug": "2.x || 3.x"},
            "devDependencies": {"mocha": "1.2.3 - 2.0.0"},
        })
    }

    #[test]
    fn test_valid_package() {
        let faults = run(valid());
        assert!(faults.is_empty(), "unexpected faults: {faults:?}");
    }

    #[test]
    fn test_engine_forms() {
        for (engine, ok) in [
            ("node >=0.10", true),
            ("node 0.8.x", true),
            (">=4", true),
            ("node", false),
            ("node1", false),
            ("node >=zero", false),
            ("", true),
        ] {
            let mut manifest = valid();
            manifest["engine"] = json!(engine);
            assert_eq!(run(manifest).is_empty(), ok, "engine: {engine:?}");
        }

        let mut manifest = valid();
        manifest["engine"] = json!({"node": ">=0.10"});
        assert_eq!(run(manifest), vec!["Field \"engine\" does not have a valid version"]);
    }

    #[test]
    fn test_fault_order() {
        let faults = run(json!({
            "name": "x",
            "version": "latest",
            "engine": "node soon",
            "dependencies": {"a": "whenever"},
            "devDependencies": {"b": "~1.2"},
        }));
        assert_eq!(
            faults,
            vec![
                "Field \"description\" is missing",
                "Field \"author\" is missing",
                "Version number \"whenever\" for \"a\" is not a valid version",
                "Field \"engine\" does not have a valid version",
                "Field \"version\" does not have a valid version",
            ]
        );
    }
}
