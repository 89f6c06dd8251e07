//! Validation report structure, used for JSON output.

use serde::Serialize;

use crate::core::Fault;
use crate::manifest::ManifestFormat;

/// Outcome of validating one manifest file.
///
/// # JSON Output Example
///
/// ```json
/// {
///   "file": "package.json",
///   "format": "npm",
///   "valid": false,
///   "faults": [
///     "Field \"engine\" is missing"
///   ]
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct ValidationReport {
    /// The file as given on the command line
    pub file: String,
    /// The format the file was validated as
    pub format: ManifestFormat,
    /// True when no faults were found
    pub valid: bool,
    /// Every rule violation, in evaluation order
    pub faults: Vec<Fault>,
}

impl ValidationReport {
    /// Build a report; validity follows from the fault list.
    #[must_use]
    pub fn new(file: impl Into<String>, format: ManifestFormat, faults: Vec<Fault>) -> Self {
        Self {
            file: file.into(),
            format,
            valid: faults.is_empty(),
            faults,
        }
    }
}
