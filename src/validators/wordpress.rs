//! WordPress plugin readme (`readme.txt`) rules.
//!
//! The readme header is a list of `Label: value` lines. Only the labels in
//! [`WORDPRESS_VERSION_PARAMS`] and [`WORDPRESS_URL_PARAMS`] are inspected,
//! and only when they appear with a non-empty value. The first occurrence of
//! a label anywhere in the text wins.
//!
//! WordPress versions are routinely written as `3.5` or even `4`, so values are
//! padded with `.0` up to three components before being checked as semver.

use regex::Regex;
use std::sync::LazyLock;

use crate::constants::{WORDPRESS_URL_PARAMS, WORDPRESS_VERSION_PARAMS};
use crate::core::Fault;
use crate::syntax::is_valid_url;
use crate::version::is_valid_version;

/// Compiled `Label:` extractors, in the order the labels are checked.
struct ParameterPatterns {
    versions: Vec<(&'static str, Regex)>,
    urls: Vec<(&'static str, Regex)>,
}

static PATTERNS: LazyLock<ParameterPatterns> = LazyLock::new(|| ParameterPatterns {
    versions: WORDPRESS_VERSION_PARAMS.iter().map(|label| (*label, parameter_regex(label))).collect(),
    urls: WORDPRESS_URL_PARAMS.iter().map(|label| (*label, parameter_regex(label))).collect(),
});

fn parameter_regex(label: &str) -> Regex {
    let pattern = format!(r"{}:[ \t]*([^\r\n]*)", regex::escape(label));
    Regex::new(&pattern).unwrap_or_else(|e| panic!("invalid readme parameter pattern {pattern:?}: {e}"))
}

/// Validate the raw text of a WordPress plugin readme.
pub fn validate(readme: &str) -> Vec<Fault> {
    let mut faults = Vec::new();

    for (label, pattern) in &PATTERNS.versions {
        match parameter_value(pattern, readme) {
            Some(value) if !is_valid_version(&pad_version(value)) => {
                faults.push(format!("Parameter \"{label}\" does not have a valid version (\"{value}\")"));
            }
            _ => {}
        }
    }

    for (label, pattern) in &PATTERNS.urls {
        if parameter_value(pattern, readme).is_some_and(|value| !is_valid_url(value)) {
            faults.push(format!("Parameter \"{label}\" contains invalid url"));
        }
    }

    faults
}

fn parameter_value<'a>(pattern: &Regex, readme: &'a str) -> Option<&'a str> {
    let value = pattern.captures(readme)?.get(1)?.as_str().trim();
    (!value.is_empty()).then_some(value)
}

/// Append `.0` to the release part until it has three components.
///
/// Pre-release and build suffixes stay attached: `3.5-beta` becomes `3.5.0-beta`.
fn pad_version(value: &str) -> String {
    let split_at = value.find(['-', '+']).unwrap_or(value.len());
    let (release, suffix) = value.split_at(split_at);

    let mut padded = release.to_string();
    for _ in release.split('.').count()..3 {
        padded.push_str(".0");
    }
    padded.push_str(suffix);
    padded
}
