//! URL syntax check with the top-level-domain length policy.
//!
//! Validation happens in two passes:
//!
//! 1. **Structure**: the URL must match an RFC 3986 style grammar restricted to
//!    the `http`, `https` and `ftp` schemes: optional userinfo, an IPv4 literal
//!    or a dotted host name, optional port, path, query and fragment. Matching
//!    is case-insensitive and admits non-ASCII characters from the BMP.
//! 2. **Top-level domain**: everything between `://` and the first following
//!    `/` is taken as the host part, and everything after its last `.` as the
//!    top domain. The top domain must be 2 or 3 characters long, or one of
//!    [`TLD_ALLOW_LIST`].
//!
//! The second pass is deliberately naive. A port or query string attached to
//! the host (`http://example.com:8080`) becomes part of the top domain, and so
//! do numeric IPv4 hosts whose last octet is a single digit. Long generic TLDs
//! such as `.travel` are rejected. Callers rely on exactly this behavior.

use regex::Regex;
use std::sync::LazyLock;

use crate::constants::TLD_ALLOW_LIST;

/// Non-ASCII BMP characters admitted anywhere a letter is.
const UCS: &str = r"\x{A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}";

static URL: LazyLock<Regex> = LazyLock::new(|| {
    let unreserved = format!(r"[a-z0-9\-._~{UCS}]");
    let pct_encoded = r"%[0-9a-f]{2}";
    let sub_delims = r"[!$&'()*+,;=]";
    let pchar = format!(r"(?:{unreserved}|{pct_encoded}|{sub_delims}|:|@)");

    let userinfo = format!(r"(?:(?:{unreserved}|{pct_encoded}|{sub_delims}|:)*@)?");

    let octet = r"(?:[0-9]|[1-9][0-9]|1[0-9][0-9]|2[0-4][0-9]|25[0-5])";
    let ipv4 = format!(r"(?:{octet}\.{octet}\.{octet}\.{octet})");

    let alnum = format!(r"[a-z0-9{UCS}]");
    let alpha = format!(r"[a-z{UCS}]");
    let label = format!(r"(?:{alnum}|{alnum}{unreserved}*{alnum})");
    let top_label = format!(r"(?:{alpha}|{alpha}{unreserved}*{alpha})");
    let hostname = format!(r"(?:(?:{label}\.)+{top_label}\.?)");

    let port = r"(?::[0-9]*)?";
    let path = format!(r"(?:/(?:{pchar}+(?:/{pchar}*)*)?)?");
    let query = format!(
        r"(?:\?(?:(?:[a-z0-9\[\]\-._~{UCS}]|{pct_encoded}|{sub_delims}|:|@)|[\x{{E000}}-\x{{F8FF}}]|/|\?)*)?"
    );
    let fragment = format!(r"(?:#(?:{pchar}|/|\?)*)?");

    let pattern = format!(
        r"(?i)^(?:https|http|ftp)://{userinfo}(?:{ipv4}|{hostname}){port}{path}{query}{fragment}$"
    );
    Regex::new(&pattern).unwrap_or_else(|e| panic!("invalid URL pattern: {e}"))
});

/// Check whether `url` is a structurally valid URL that passes the TLD policy.
///
/// # Examples
///
/// ```rust
/// use mval_cli::syntax::is_valid_url;
///
/// assert!(is_valid_url("https://example.com/path"));
/// assert!(is_valid_url("ftp://x.io"));
/// assert!(is_valid_url("http://plugins.example.museum/"));
/// assert!(!is_valid_url("http://x.abcdef"));
/// assert!(!is_valid_url("mailto:someone@example.com"));
/// ```
#[must_use]
pub fn is_valid_url(url: &str) -> bool {
    URL.is_match(url) && has_acceptable_top_domain(url)
}

fn has_acceptable_top_domain(url: &str) -> bool {
    let host = url.split("://").nth(1).and_then(|rest| rest.split('/').next()).unwrap_or_default();
    let top_domain = host.rsplit('.').next().unwrap_or(host);
    let length = top_domain.chars().count();

    if length < 2 {
        return false;
    }
    length <= 3 || TLD_ALLOW_LIST.contains(&top_domain)
}
