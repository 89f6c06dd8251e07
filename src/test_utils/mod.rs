//! Test utilities for mval
//!
//! This module provides helpers shared by unit tests and the integration tests
//! in `tests/`. It is compiled for `cfg(test)` and, for integration tests, via
//! the `test-utils` feature.
//!
//! - [`fixtures::ManifestFixture`] - ready-made valid and broken manifests for
//!   every supported format, writable into a temporary directory
//! - [`init_test_logging`] - one-time tracing setup that plays well with the
//!   test harness
//!
//! # Example
//!
//! ```rust,no_run
//! use mval_cli::test_utils::ManifestFixture;
//! use mval_cli::validation::validate_path;
//!
//! let dir = tempfile::tempdir().unwrap();
//! let path = ManifestFixture::composer().write_to(dir.path()).unwrap();
//! assert!(validate_path(&path, None).unwrap().is_empty());
//! ```

pub mod fixtures;

pub use fixtures::ManifestFixture;

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Only the first call has any effect. The explicit `level` wins over
/// `RUST_LOG`; with neither, logging stays off.
///
/// # Example
///
/// ```rust,no_run
/// use tracing::Level;
///
/// mval_cli::test_utils::init_test_logging(Some(Level::DEBUG));
/// ```
///
/// To enable logging in tests via environment variable:
/// ```bash
/// RUST_LOG=mval_cli=trace cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_ansi(true)
            .try_init();
    });
}
