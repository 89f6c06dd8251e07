//! Version and version-range validation for manifest fields.
//!
//! Package manifests carry two kinds of version strings: the package's own
//! version (`"1.2.3"`) and dependency constraints (`"^1.2"`, `">=1.0.0 <2.0.0"`).
//! This module answers, for any string, whether it is a valid single version and
//! whether it is a valid range. Neither check resolves anything; both are pure
//! syntax predicates.
//!
//! # Module Organization
//!
//! - [`is_valid_version`] - single semantic version, parsed with the `semver` crate
//! - [`is_valid_version_range`] - npm-style range expressions, see [`range`]
//!
//! # Single Versions
//!
//! A single version is `MAJOR.MINOR.PATCH` with optional `-prerelease` and
//! `+build` parts, optionally prefixed with `v`. Leading zeros in numeric
//! identifiers are rejected.
//!
//! # Ranges
//!
//! Ranges follow the npm grammar used by jQuery, npm and (for the common subset)
//! Composer manifests:
//! - **Exact and partial versions**: `"1.2.3"`, `"1.2"`, `"1"`
//! - **Wildcards**: `"*"`, `"1.x"`, `"2.1.*"`
//! - **Comparators**: `">=1.0.0"`, `"<2"`, `"=1.2.3"`
//! - **Caret and tilde**: `"^1.2.3"`, `"~1.2"`, `"~>1.2"`
//! - **Hyphen ranges**: `"1.0.0 - 2.0.0"`
//! - **Compound ranges**: `">=1.0.0 <2.0.0 || ^3.0.0"`
//!
//! # The `dev-master` Exception
//!
//! Composer manifests routinely use `dev-master` as a version. It is not semver,
//! but both checks accept it explicitly rather than widening the grammar.
//!
//! # Examples
//!
//! ```rust
//! use mval_cli::version::{is_valid_version, is_valid_version_range};
//!
//! assert!(is_valid_version("1.2.3"));
//! assert!(is_valid_version("v1.0.0-beta.1+build.5"));
//! assert!(!is_valid_version("1.2"));
//!
//! assert!(is_valid_version_range("^1.2"));
//! assert!(is_valid_version_range(">=1.0.0 <2.0.0 || 3.x"));
//! assert!(!is_valid_version_range("not-a-version"));
//!
//! assert!(is_valid_version("dev-master"));
//! assert!(is_valid_version_range("dev-master"));
//! ```

pub mod range;

use semver::Version;

use crate::constants::{DEV_MASTER, MAX_VERSION_LENGTH};

pub use range::is_valid_range;

/// Check whether `version` is a valid single semantic version.
///
/// Surrounding whitespace and a single leading `v` are ignored. The literal
/// `dev-master` is accepted.
///
/// # Examples
///
/// ```rust
/// use mval_cli::version::is_valid_version;
///
/// assert!(is_valid_version("1.2.3"));
/// assert!(is_valid_version(" v2.0.0 "));
/// assert!(!is_valid_version("01.2.3"));
/// assert!(!is_valid_version("not-a-version"));
/// ```
#[must_use]
pub fn is_valid_version(version: &str) -> bool {
    if version == DEV_MASTER {
        return true;
    }
    if version.len() > MAX_VERSION_LENGTH {
        return false;
    }

    let trimmed = version.trim();
    let cleaned = trimmed.strip_prefix('v').unwrap_or(trimmed);
    Version::parse(cleaned).is_ok()
}

/// Check whether `range` is a valid version range or constraint expression.
///
/// Every valid single version is also a valid range. The literal `dev-master`
/// is accepted.
///
/// # Examples
///
/// ```rust
/// use mval_cli::version::is_valid_version_range;
///
/// assert!(is_valid_version_range("~1.2.3"));
/// assert!(is_valid_version_range("1.0.0 - 2.0.0"));
/// assert!(is_valid_version_range("*"));
/// assert!(!is_valid_version_range(">=banana"));
/// ```
#[must_use]
pub fn is_valid_version_range(range: &str) -> bool {
    if range == DEV_MASTER {
        return true;
    }
    is_valid_range(range)
}
