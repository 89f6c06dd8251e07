//! E-mail address syntax check.

use regex::Regex;
use std::sync::LazyLock;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9_.\-]+@(?:[a-zA-Z0-9\-]+\.)+[a-zA-Z0-9]{2,4}$")
        .unwrap_or_else(|e| panic!("invalid e-mail pattern: {e}"))
});

/// Check whether `email` looks like `local-part@label.label.tld`.
///
/// The local part may contain letters, digits, `_`, `.` and `-`. The domain
/// needs at least two labels and the final label must be 2 to 4 alphanumeric
/// characters.
///
/// # Examples
///
/// ```rust
/// use mval_cli::syntax::is_valid_email;
///
/// assert!(is_valid_email("dev_team@mail.example.org"));
/// assert!(!is_valid_email("no-at-sign.example.com"));
/// assert!(!is_valid_email("someone@example.c"));
/// ```
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}
