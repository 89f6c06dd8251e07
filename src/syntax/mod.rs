//! Syntax checks for e-mail addresses and URLs found in manifests.
//!
//! Both checks are purely structural: they compile a regular expression once,
//! match the input against it and never touch the network. No DNS or MX
//! lookups are performed and no URL is fetched.
//!
//! - [`email`] - `local@domain.tld` addresses
//! - [`url`] - `http`, `https` and `ftp` URLs with the top-level-domain length policy
//!
//! # Examples
//!
//! ```rust
//! use mval_cli::syntax::{is_valid_email, is_valid_url};
//!
//! assert!(is_valid_email("jane.doe@example.com"));
//! assert!(!is_valid_email("jane.doe@localhost"));
//!
//! assert!(is_valid_url("https://example.com/path?q=1#top"));
//! assert!(!is_valid_url("http://x.abcdef"));
//! ```

pub mod email;
pub mod url;

pub use email::is_valid_email;
pub use url::is_valid_url;
