//! Recursive scan for e-mail and URL values anywhere in a JSON manifest.
//!
//! Manifests nest contact details in many places (`author`, `authors[]`,
//! `maintainers[]`, `support`, ...). Rather than listing every location per
//! format, the scanner walks the whole tree and checks any value stored under
//! a key named `email`, `url` or `homepage`.
//!
//! Faults are reported in traversal order, which follows the key order of the
//! value being scanned. Parsed files keep document order; values built in code
//! keep insertion order.

use serde_json::Value;

use super::fields::display_value;
use crate::core::Fault;
use crate::syntax::{is_valid_email, is_valid_url};

/// Walk `node` and report every invalid `email`, `url` or `homepage` value.
///
/// Sequence elements are descended into but have no key of their own, so a
/// bare string inside an array is never checked. Empty URL strings and `null`
/// values are skipped.
///
/// # Examples
///
/// ```rust
/// use mval_cli::validators::scanner::scan_for_invalid_values;
/// use serde_json::json;
///
/// let manifest = json!({
///     "author": {"name": "Jane", "email": "jane-at-example.com"},
///     "maintainers": [{"url": "https://example.com"}]
/// });
/// assert_eq!(scan_for_invalid_values(&manifest), vec!["Incorrect e-mail \"jane-at-example.com\""]);
/// ```
#[must_use]
pub fn scan_for_invalid_values(node: &Value) -> Vec<Fault> {
    let mut faults = Vec::new();
    scan_into(node, &mut faults);
    faults
}

fn scan_into(node: &Value, faults: &mut Vec<Fault>) {
    match node {
        Value::Object(map) => {
            for (key, value) in map {
                if value.is_object() || value.is_array() {
                    scan_into(value, faults);
                } else if let Some(fault) = check_leaf(key, value) {
                    faults.push(fault);
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                scan_into(item, faults);
            }
        }
        _ => {}
    }
}

fn check_leaf(key: &str, value: &Value) -> Option<Fault> {
    if value.is_null() {
        return None;
    }
    let text = display_value(value);

    match key {
        "email" if !is_valid_email(&text) => Some(format!("Incorrect e-mail \"{text}\"")),
        "url" | "homepage" if !text.is_empty() && !is_valid_url(&text) => {
            Some(format!("Incorrect URL \"{text}\""))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_tree_has_no_faults() {
        let manifest = json!({
            "name": "demo",
            "homepage": "https://example.com",
            "author": {"name": "A", "email": "a@example.com", "url": "http://example.org"},
            "contributors": [{"email": "b@example.net"}],
        });
        assert!(scan_for_invalid_values(&manifest).is_empty());
    }

    #[test]
    fn test_nested_faults_in_key_order() {
        let manifest = json!({
            "homepage": "example.com",
            "authors": [
                {"name": "A", "email": "broken"},
                {"name": "B", "homepage": "http://x.abcdef"},
            ],
            "support": {"issues": {"url": "ftp://bad host.com"}},
        });
        assert_eq!(
            scan_for_invalid_values(&manifest),
            vec![
                "Incorrect URL \"example.com\"",
                "Incorrect e-mail \"broken\"",
                "Incorrect URL \"http://x.abcdef\"",
                "Incorrect URL \"ftp://bad host.com\"",
            ]
        );
    }

    #[test]
    fn test_non_string_leaves_are_rendered() {
        let manifest = json!({"email": 42, "url": true});
        assert_eq!(
            scan_for_invalid_values(&manifest),
            vec!["Incorrect e-mail \"42\"", "Incorrect URL \"true\""]
        );
    }

    #[test]
    fn test_skips_null_empty_urls_and_bare_array_strings() {
        let manifest = json!({
            "email": null,
            "homepage": "",
            "url": ["not checked"],
            "other": "still not checked@",
        });
        assert!(scan_for_invalid_values(&manifest).is_empty());
    }

    #[test]
    fn test_other_keys_are_ignored() {
        let manifest = json!({"repository": "git://whatever", "mail": "nope"});
        assert!(scan_for_invalid_values(&manifest).is_empty());
    }
}
