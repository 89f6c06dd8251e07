//! Android (`AndroidManifest.xml`) rules.
//!
//! The manifest is parsed with `roxmltree` and checked in three passes:
//!
//! 1. The root element must have exactly one direct `<application>` child.
//! 2. A `versionName` attribute on the root, if any, must be a valid version.
//! 3. Every element reachable through one of [`ANDROID_ELEMENT_PATHS`] has its
//!    attributes checked against per-attribute value rules. Attributes without
//!    a rule are ignored.
//!
//! Attributes are matched by local name, so `android:name` and `name` are the
//! same attribute here.

use regex::Regex;
use roxmltree::{Document, Node};
use std::sync::LazyLock;

use crate::constants::{ANDROID_BOOLEAN_ATTRIBUTES, ANDROID_ELEMENT_PATHS};
use crate::core::Fault;
use crate::version::is_valid_version;

static COMPONENT_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._]+$").unwrap_or_else(|e| panic!("invalid component name pattern: {e}"))
});

static MIME_TYPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_]+/[A-Za-z0-9_]+$").unwrap_or_else(|e| panic!("invalid mime type pattern: {e}"))
});

/// Validate the raw text of an Android manifest.
///
/// # Errors
///
/// Returns the parser error if `xml` is not well-formed. Malformed XML is a
/// resolution failure, not a fault.
pub fn validate(xml: &str) -> Result<Vec<Fault>, roxmltree::Error> {
    let document = Document::parse(xml)?;
    let root = document.root_element();
    let mut faults = Vec::new();

    let applications = child_elements(root, "application").count();
    if applications != 1 {
        faults.push(format!(
            "Manifest must contain exactly one \"application\" element (found {applications})"
        ));
    }

    if let Some(version) = attribute(root, "versionName") {
        if !is_valid_version(version) {
            faults.push("Attribute \"versionName\" does not have a valid version".to_string());
        }
    }

    for path in ANDROID_ELEMENT_PATHS {
        for element in select(root, path) {
            for attr in element.attributes() {
                if has_valid_value(attr.name(), attr.value()) {
                    continue;
                }
                faults.push(format!(
                    "Attribute \"{}\" of {} has an invalid value \"{}\"",
                    attr.name(),
                    path,
                    attr.value()
                ));
            }
        }
    }

    Ok(faults)
}

fn child_elements<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    name: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    node.children().filter(move |child| child.is_element() && child.tag_name().name() == name)
}

fn attribute<'a>(node: Node<'a, '_>, name: &str) -> Option<&'a str> {
    node.attributes().find(|attr| attr.name() == name).map(|attr| attr.value())
}

/// All elements reached from `root` by following a `/`-separated path of element names.
fn select<'a, 'input>(root: Node<'a, 'input>, path: &'a str) -> Vec<Node<'a, 'input>> {
    path.split('/').fold(vec![root], |nodes, segment| {
        nodes.into_iter().flat_map(|node| child_elements(node, segment)).collect()
    })
}

/// Value rule for one attribute. Attributes without a rule are always valid.
fn has_valid_value(name: &str, value: &str) -> bool {
    match name {
        "name" => COMPONENT_NAME.is_match(value),
        "mimeType" => MIME_TYPE.is_match(value),
        "scheme" => is_valid_scheme(value),
        "port" => !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()),
        _ if ANDROID_BOOLEAN_ATTRIBUTES.contains(&name) => matches!(value, "true" | "false"),
        _ => true,
    }
}

/// Lower-case letters and colons; a value containing a colon must end with one.
fn is_valid_scheme(value: &str) -> bool {
    !value.is_empty()
        && value.bytes().all(|b| b.is_ascii_lowercase() || b == b':')
        && (!value.contains(':') || value.ends_with(':'))
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<manifest xmlns:android="http://schemas.android.com/apk/res/android"
    package="com.example.app"
    android:versionCode="3"
    android:versionName="1.2.0">
    <uses-permission android:name="android.permission.INTERNET" />
    <application android:label="Example" android:hardwareAccelerated="true">
        <activity android:name=".MainActivity" android:exported="true" android:excludeFromRecents="false">
            <intent-filter>
                <action android:name="android.intent.action.MAIN" />
                <category android:name="android.intent.category.LAUNCHER" />
                <data android:scheme="https" android:host="example.com" android:port="443" android:mimeType="text/html" />
            </intent-filter>
        </activity>
        <provider android:name="com.example.app.Provider" android:syncable="true" />
        <service android:name=".SyncService" android:exported="false" />
    </application>
</manifest>
"#;

    #[test]
    fn test_valid_manifest() {
        let faults = validate(MANIFEST).unwrap();
        assert!(faults.is_empty(), "unexpected faults: {faults:?}");
    }

    #[test]
    fn test_application_count() {
        let none = r#"<manifest xmlns:android="http://schemas.android.com/apk/res/android" android:versionName="1.0.0"/>"#;
        assert_eq!(
            validate(none).unwrap(),
            vec!["Manifest must contain exactly one \"application\" element (found 0)"]
        );

        let two = "<manifest><application/><application/></manifest>";
        assert_eq!(
            validate(two).unwrap(),
            vec!["Manifest must contain exactly one \"application\" element (found 2)"]
        );

        // Only direct children of the root count
        let nested = "<manifest><wrapper><application/></wrapper></manifest>";
        assert_eq!(validate(nested).unwrap().len(), 1);
    }

    #[test]
    fn test_version_name() {
        let manifest = MANIFEST.replace("android:versionName=\"1.2.0\"", "android:versionName=\"1.2\"");
        assert_eq!(
            validate(&manifest).unwrap(),
            vec!["Attribute \"versionName\" does not have a valid version"]
        );

        let manifest = MANIFEST.replace("android:versionName=\"1.2.0\"", "");
        assert!(validate(&manifest).unwrap().is_empty());
    }

    #[test]
    fn test_attribute_values() {
        let manifest = MANIFEST
            .replace("android:exported=\"true\"", "android:exported=\"yes\"")
            .replace("android:scheme=\"https\"", "android:scheme=\"HTTPS\"")
            .replace("android:port=\"443\"", "android:port=\"44a\"")
            .replace("text/html", "text/html; charset=utf-8")
            .replace("android.permission.INTERNET", "android permission");
        assert_eq!(
            validate(&manifest).unwrap(),
            vec![
                "Attribute \"name\" of uses-permission has an invalid value \"android permission\"",
                "Attribute \"exported\" of application/activity has an invalid value \"yes\"",
                "Attribute \"scheme\" of application/activity/intent-filter/data has an invalid value \"HTTPS\"",
                "Attribute \"port\" of application/activity/intent-filter/data has an invalid value \"44a\"",
                "Attribute \"mimeType\" of application/activity/intent-filter/data has an invalid value \"text/html; charset=utf-8\"",
            ]
        );
    }

    #[test]
    fn test_scheme_values() {
        for scheme in ["https", "content:", "a:b:", "::"] {
            let manifest = MANIFEST.replace("android:scheme=\"https\"", &format!("android:scheme=\"{scheme}\""));
            assert!(validate(&manifest).unwrap().is_empty(), "scheme {scheme:?} should be accepted");
        }
        for scheme in ["a:b", "Http", "web+cal", ""] {
            let manifest = MANIFEST.replace("android:scheme=\"https\"", &format!("android:scheme=\"{scheme}\""));
            assert_eq!(
                validate(&manifest).unwrap(),
                vec![format!(
                    "Attribute \"scheme\" of application/activity/intent-filter/data has an invalid value \"{scheme}\""
                )],
                "scheme {scheme:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_unlisted_elements_are_not_checked() {
        let manifest = MANIFEST.replace(
            "<uses-permission",
            "<uses-feature android:name=\"not a valid name\" />\n    <uses-permission",
        );
        assert!(validate(&manifest).unwrap().is_empty());
    }

    #[test]
    fn test_malformed_xml_is_an_error() {
        assert!(validate("<manifest><application></manifest>").is_err());
        assert!(validate("").is_err());
    }

    #[test]
    fn test_scheme_rule() {
        assert!(is_valid_scheme("http"));
        assert!(is_valid_scheme("content:"));
        assert!(!is_valid_scheme(":"));
        assert!(!is_valid_scheme("a:b"));
        assert!(!is_valid_scheme("my-app"));
        assert!(!is_valid_scheme(""));
    }
}
