//! Error handling for mval
//!
//! This module provides the error types and user-friendly error reporting for the
//! manifest validator. The error system separates two very different outcomes:
//! 1. **Usage errors** ([`MvalError`]) - the manifest could not be evaluated at all
//! 2. **Validation faults** - plain strings returned by the validators when a manifest
//!    was evaluated and broke one or more rules
//!
//! Faults are business results and are never represented by this module. Anything in
//! here means "could not evaluate", for example an unreadable file, malformed JSON or a
//! format that cannot be determined from the file name.
//!
//! # Architecture
//!
//! - [`MvalError`] - Enumerated error types for every way a validation call can fail
//! - [`ErrorContext`] - Wrapper that adds user-friendly details and suggestions
//! - [`user_friendly_error`] - Converts any [`anyhow::Error`] into an [`ErrorContext`]
//!
//! # Examples
//!
//! ```rust,no_run
//! use mval_cli::core::{MvalError, ErrorContext, user_friendly_error};
//!
//! let error = MvalError::FormatUndetectable {
//!     path: "manifest.cfg".to_string(),
//! };
//!
//! let context = user_friendly_error(anyhow::Error::from(error));
//! context.display(); // Shows colored error with a suggestion to pass --type
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

use crate::manifest::ManifestFormat;

/// Errors that prevent a manifest from being evaluated.
///
/// Each variant describes a usage or resolution failure. They are surfaced
/// immediately to the caller and are never retried. Rule violations found while
/// evaluating a manifest are reported as faults instead.
#[derive(Error, Debug)]
pub enum MvalError {
    /// The manifest format could not be derived from the file name
    #[error("Unable to determine type from file name '{path}', please supply a type")]
    FormatUndetectable {
        /// Path whose name matched no known manifest pattern
        path: String,
    },

    /// A format tag did not name any supported manifest format
    #[error("Unknown type '{tag}'")]
    UnknownFormat {
        /// The rejected tag as supplied by the caller
        tag: String,
    },

    /// In-memory input was supplied without an explicit format
    #[error("Argument type has to be given")]
    FormatRequired,

    /// The input has a shape the requested format cannot accept
    #[error("Invalid input for {format} manifest: {reason}")]
    InvalidInput {
        /// Format the input was supposed to be validated against
        format: ManifestFormat,
        /// Why the input was rejected
        reason: String,
    },

    /// The given path does not point to a regular file
    #[error("Argument has to be an object or path to file that should be validated: {path}")]
    NotAFile {
        /// The path that was checked
        path: String,
    },

    /// Reading the manifest file failed
    #[error("Unable to read {path}: {source}")]
    FileRead {
        /// The path that could not be read
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The manifest content is not valid JSON
    #[error("Unable to parse JSON using {file}: {reason}")]
    JsonParse {
        /// File name, or `<input>` for in-memory content
        file: String,
        /// Parser error message including line and column
        reason: String,
    },

    /// The manifest content is not well-formed XML
    #[error("Unable to parse XML using {file}: {reason}")]
    XmlParse {
        /// File name, or `<input>` for in-memory content
        file: String,
        /// Parser error message including position
        reason: String,
    },

    /// Generic error with a free-form message
    #[error("{message}")]
    Other {
        /// Generic error message
        message: String,
    },
}

impl Clone for MvalError {
    fn clone(&self) -> Self {
        match self {
            Self::FormatUndetectable {
                path,
            } => Self::FormatUndetectable {
                path: path.clone(),
            },
            Self::UnknownFormat {
                tag,
            } => Self::UnknownFormat {
                tag: tag.clone(),
            },
            Self::FormatRequired => Self::FormatRequired,
            Self::InvalidInput {
                format,
                reason,
            } => Self::InvalidInput {
                format: *format,
                reason: reason.clone(),
            },
            Self::NotAFile {
                path,
            } => Self::NotAFile {
                path: path.clone(),
            },
            // io::Error is not Clone, so rebuild it from its kind and message
            Self::FileRead {
                path,
                source,
            } => Self::FileRead {
                path: path.clone(),
                source: std::io::Error::new(source.kind(), source.to_string()),
            },
            Self::JsonParse {
                file,
                reason,
            } => Self::JsonParse {
                file: file.clone(),
                reason: reason.clone(),
            },
            Self::XmlParse {
                file,
                reason,
            } => Self::XmlParse {
                file: file.clone(),
                reason: reason.clone(),
            },
            Self::Other {
                message,
            } => Self::Other {
                message: message.clone(),
            },
        }
    }
}

/// Error context wrapper that provides user-friendly error information.
///
/// `ErrorContext` wraps an [`MvalError`] and adds optional details and a
/// suggestion. It is what the CLI prints when a validation call fails.
///
/// # Examples
///
/// ```rust,no_run
/// use mval_cli::core::{MvalError, ErrorContext};
///
/// let context = ErrorContext::new(MvalError::FormatRequired)
///     .with_suggestion("Pass --type npm")
///     .with_details("In-memory manifests carry no file name to detect a type from");
///
/// context.display();
/// ```
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: MvalError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context from an [`MvalError`] with no suggestion or details.
    #[must_use]
    pub const fn new(error: MvalError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error.
    ///
    /// Suggestions are displayed in green in the terminal.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add additional details explaining the error.
    ///
    /// Details are displayed in yellow in the terminal.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Display the error context to stderr with terminal colors
    ///
    /// - Error message: Red and bold
    /// - Details: Yellow
    /// - Suggestion: Green
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error to a user-friendly [`ErrorContext`] with actionable suggestions
///
/// Recognizes [`MvalError`] and [`std::io::Error`] and attaches tailored
/// suggestions. Anything else becomes [`MvalError::Other`] with its full cause
/// chain in the message.
///
/// # Examples
///
/// ```rust,no_run
/// use mval_cli::core::user_friendly_error;
///
/// let error = anyhow::anyhow!("Something went wrong");
/// let context = user_friendly_error(error);
///
/// context.display();
/// ```
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    if let Some(mval_error) = error.downcast_ref::<MvalError>() {
        return create_error_context(mval_error.clone());
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        let context = ErrorContext::new(MvalError::FileRead {
            path: "unknown".to_string(),
            source: std::io::Error::new(io_error.kind(), io_error.to_string()),
        });
        return match io_error.kind() {
            std::io::ErrorKind::PermissionDenied => context
                .with_suggestion("Check the file permissions or run as a user that can read it")
                .with_details("mval needs read access to the manifest file"),
            std::io::ErrorKind::NotFound => context
                .with_suggestion("Check that the file exists and the path is correct"),
            _ => context,
        };
    }

    // Generic error - include the full error chain for better diagnostics
    let mut message = error.to_string();
    let chain: Vec<String> = error.chain().skip(1).map(std::string::ToString::to_string).collect();

    if !chain.is_empty() {
        message.push_str("\n\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            message.push_str(&format!("\n  {}: {}", i + 1, cause));
        }
    }

    ErrorContext::new(MvalError::Other {
        message,
    })
}

/// Map each [`MvalError`] variant to an [`ErrorContext`] with a tailored suggestion.
fn create_error_context(error: MvalError) -> ErrorContext {
    match &error {
        MvalError::FormatUndetectable {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Pass the manifest type explicitly, e.g. '--type composer'")
            .with_details(
                "Types are detected from file names: *.jquery.json, composer.json, readme.txt, package.json, AndroidManifest.xml",
            ),

        MvalError::UnknownFormat {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Use one of: jquery, composer, wordpress, npm, android"),

        MvalError::FormatRequired => ErrorContext::new(error)
            .with_suggestion("Supply the manifest type together with in-memory content"),

        MvalError::InvalidInput {
            ..
        } => ErrorContext::new(error)
            .with_details("JSON manifests must be objects; readme and XML manifests must be text"),

        MvalError::NotAFile {
            ..
        } => ErrorContext::new(error).with_suggestion("Check that the path points to an existing file"),

        MvalError::FileRead {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Check that the file exists and that you have permission to read it"),

        MvalError::JsonParse {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Check the JSON syntax: quotes, commas and matching brackets")
            .with_details("The manifest must be a single JSON object"),

        MvalError::XmlParse {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Check that every element is closed and the android namespace is declared"),

        MvalError::Other {
            ..
        } => ErrorContext::new(error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MvalError::FormatUndetectable {
            path: "foo.cfg".to_string(),
        };
        assert!(err.to_string().contains("foo.cfg"));
        assert!(err.to_string().contains("please supply a type"));

        let err = MvalError::UnknownFormat {
            tag: "gradle".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown type 'gradle'");

        let err = MvalError::JsonParse {
            file: "package.json".to_string(),
            reason: "expected value at line 1 column 1".to_string(),
        };
        assert!(err.to_string().contains("Unable to parse JSON using package.json"));
    }

    #[test]
    fn test_error_clone_keeps_io_kind() {
        let err = MvalError::FileRead {
            path: "composer.json".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let cloned = err.clone();
        match cloned {
            MvalError::FileRead {
                path,
                source,
            } => {
                assert_eq!(path, "composer.json");
                assert_eq!(source.kind(), std::io::ErrorKind::PermissionDenied);
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn test_error_context_display() {
        let ctx = ErrorContext::new(MvalError::FormatRequired)
            .with_suggestion("pass --type")
            .with_details("no file name");
        let rendered = ctx.to_string();
        assert!(rendered.contains("Argument type has to be given"));
        assert!(rendered.contains("Details: no file name"));
        assert!(rendered.contains("Suggestion: pass --type"));
    }

    #[test]
    fn test_user_friendly_error_for_undetectable_format() {
        let err = anyhow::Error::from(MvalError::FormatUndetectable {
            path: "x.cfg".to_string(),
        });
        let ctx = user_friendly_error(err);
        assert!(matches!(ctx.error, MvalError::FormatUndetectable { .. }));
        assert!(ctx.suggestion.unwrap().contains("--type"));
    }

    #[test]
    fn test_user_friendly_error_for_io_error() {
        let err = anyhow::Error::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        let ctx = user_friendly_error(err);
        assert!(matches!(ctx.error, MvalError::FileRead { .. }));
        assert!(ctx.suggestion.is_some());
    }

    #[test]
    fn test_user_friendly_error_generic_includes_chain() {
        let err = anyhow::anyhow!("root cause").context("outer context");
        let ctx = user_friendly_error(err);
        let message = ctx.error.to_string();
        assert!(message.contains("outer context"));
        assert!(message.contains("Caused by:"));
        assert!(message.contains("root cause"));
    }
}
