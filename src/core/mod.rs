//! Core types and functionality for mval
//!
//! This module holds the pieces every other module relies on: the error type
//! returned by validation calls and the user-facing error presentation used by
//! the CLI.
//!
//! # Error Management
//!
//! mval distinguishes "could not evaluate" from "evaluated and found problems":
//! - **Strongly-typed errors** ([`MvalError`]) for usage and resolution failures
//! - **User-friendly contexts** ([`ErrorContext`]) with actionable suggestions for CLI users
//! - **Faults** are plain [`Fault`] strings and never travel through this error type
//!
//! # Examples
//!
//! ```rust,no_run
//! use mval_cli::core::{MvalError, user_friendly_error};
//! use anyhow::Result;
//!
//! fn example_operation() -> Result<Vec<String>> {
//!     Err(MvalError::FormatRequired.into())
//! }
//!
//! if let Err(e) = example_operation() {
//!     user_friendly_error(e).display();
//! }
//! ```

pub mod error;

pub use error::{ErrorContext, MvalError, user_friendly_error};

/// A single human-readable rule violation, e.g. `Field "name" is missing`.
///
/// Faults carry no structured code; the message is the whole payload. An empty
/// list of faults means the manifest is valid.
pub type Fault = String;
