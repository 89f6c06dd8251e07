//! npm-style version range grammar.
//!
//! The `semver` crate's [`VersionReq`](semver::VersionReq) speaks Cargo's
//! comma-separated dialect, which rejects most constraints found in
//! `package.json` and `*.jquery.json` files (`"1.x"`, `">=1 <2"`, `"1 - 2"`,
//! `"a || b"`). This module implements the npm dialect as a syntax check.
//!
//! # Grammar
//!
//! ```text
//! range       ::= set ( '||' set )*
//! set         ::= hyphen | comparator ( ' '+ comparator )* | ''
//! hyphen      ::= partial ' '+ '-' ' '+ partial
//! comparator  ::= ( '^' | '~' | '~>' | ( '<' | '>' )? '=' ? ) partial
//! partial     ::= [v=]* xr ( '.' xr ( '.' xr prerelease? build? )? )?
//! xr          ::= '0' | [1-9][0-9]* | 'x' | 'X' | '*'
//! ```
//!
//! Whitespace between an operator and its version is ignored, so `">= 1.2.3"`
//! is the same comparator as `">=1.2.3"`.

use regex::Regex;
use std::sync::LazyLock;

use crate::constants::MAX_VERSION_LENGTH;

const XR_IDENTIFIER: &str = r"(?:0|[1-9]\d*|x|X|\*)";
const PRERELEASE_IDENTIFIER: &str = r"(?:0|[1-9]\d*|\d*[a-zA-Z-][a-zA-Z0-9-]*)";
const BUILD_IDENTIFIER: &str = r"[0-9A-Za-z-]+";

/// A possibly partial version such as `1`, `1.x`, `v1.2.3-beta+exp`.
static XRANGE_PLAIN: LazyLock<String> = LazyLock::new(|| {
    let prerelease = format!(r"(?:-{PRERELEASE_IDENTIFIER}(?:\.{PRERELEASE_IDENTIFIER})*)");
    let build = format!(r"(?:\+{BUILD_IDENTIFIER}(?:\.{BUILD_IDENTIFIER})*)");
    format!(
        r"[v=\s]*{XR_IDENTIFIER}(?:\.{XR_IDENTIFIER}(?:\.{XR_IDENTIFIER}{prerelease}?{build}?)?)?"
    )
});

static HYPHEN_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    let plain = XRANGE_PLAIN.as_str();
    compile(&format!(r"^\s*{plain}\s+-\s+{plain}\s*$"))
});

static COMPARATOR: LazyLock<Regex> = LazyLock::new(|| {
    let plain = XRANGE_PLAIN.as_str();
    compile(&format!(r"^(?:\^|~>?|(?:<|>)?=?){plain}$"))
});

static OPERATOR_GAP: LazyLock<Regex> = LazyLock::new(|| compile(r"(\^|~>?|[<>]=?|=)\s+"));

static SET_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| compile(r"\s*\|\|\s*"));

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid range pattern {pattern:?}: {e}"))
}

/// Check whether `range` is a syntactically valid npm-style range.
///
/// # Examples
///
/// ```rust
/// use mval_cli::version::range::is_valid_range;
///
/// assert!(is_valid_range(">=1.0.0 <2.0.0"));
/// assert!(is_valid_range("1.2.x || ^2"));
/// assert!(is_valid_range(""));
/// assert!(!is_valid_range("latest"));
/// ```
#[must_use]
pub fn is_valid_range(range: &str) -> bool {
    if range.len() > MAX_VERSION_LENGTH {
        return false;
    }

    SET_SEPARATOR.split(range.trim()).all(is_valid_set)
}

/// Check one `||`-separated alternative.
fn is_valid_set(set: &str) -> bool {
    let set = set.trim();
    if set.is_empty() || HYPHEN_RANGE.is_match(set) {
        return true;
    }

    let collapsed = OPERATOR_GAP.replace_all(set, "$1");
    collapsed.split_whitespace().all(|comparator| COMPARATOR.is_match(comparator))
}
