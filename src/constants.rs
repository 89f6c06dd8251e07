//! Global constants used throughout the mval codebase.
//!
//! This module contains the fixed tables and limits that the validators share:
//! version length limits, the top-level-domain allow-list used by the URL
//! checker, and the parameter/element names inspected by the text-based
//! format validators. Defining them centrally keeps the rule sets readable.

/// Maximum accepted length of a version or range string.
///
/// Longer strings are rejected outright before any grammar matching happens.
pub const MAX_VERSION_LENGTH: usize = 256;

/// Literal accepted by both version checks even though it is not semver.
///
/// Composer uses `dev-master` to point at the tip of the default branch.
pub const DEV_MASTER: &str = "dev-master";

/// Top-level domains longer than three characters that URLs may still use.
pub const TLD_ALLOW_LIST: &[&str] = &["coop", "info", "museum", "name", "mobi"];

/// Fields holding URLs on jQuery and Composer manifests.
pub const URL_FIELDS: &[&str] = &["homepage", "demo", "bugs"];

/// WordPress readme parameters whose value must be a version.
pub const WORDPRESS_VERSION_PARAMS: &[&str] = &["Tested up to", "Requires at least", "Stable tag"];

/// WordPress readme parameters whose value must be a URL.
pub const WORDPRESS_URL_PARAMS: &[&str] = &["License URI", "Donate link", "Plugin URI", "Author URI"];

/// Android element paths (relative to the `<manifest>` root) whose attributes are checked.
pub const ANDROID_ELEMENT_PATHS: &[&str] = &[
    "uses-permission",
    "application/activity",
    "application/activity/intent-filter/category",
    "application/activity/intent-filter/action",
    "application/activity/intent-filter/data",
    "application/provider",
    "application/service",
    "application/service/intent-filter/category",
    "application/service/intent-filter/action",
    "application/service/intent-filter/data",
];

/// Android attributes that only accept the literals `true` and `false`.
pub const ANDROID_BOOLEAN_ATTRIBUTES: &[&str] =
    &["hardwareAccelerated", "syncable", "excludeFromRecents", "exported"];
