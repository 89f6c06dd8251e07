//! Validation command execution and report printing.

use anyhow::Result;
use colored::Colorize;

use super::command::{OutputFormat, ValidateCommand};
use super::results::ValidationReport;
use crate::manifest::ManifestFormat;
use crate::validation::{resolve_format, validate_path};

impl ValidateCommand {
    /// Validate the file and print the report.
    ///
    /// # Errors
    ///
    /// Returns an error if the manifest cannot be evaluated (unknown type,
    /// unreadable or malformed file), and also after printing the report when
    /// faults were found, so the process exits with a failure status.
    pub fn execute(self) -> Result<()> {
        let explicit = self.manifest_type.as_deref().map(str::parse::<ManifestFormat>).transpose()?;
        let format = resolve_format(&self.file, explicit)?;
        tracing::debug!("Validating {} as {}", self.file.display(), format);

        let faults = validate_path(&self.file, Some(format))?;
        let report = ValidationReport::new(self.file.display().to_string(), format, faults);

        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
            OutputFormat::Text => print_text_report(&report),
        }

        if report.valid {
            Ok(())
        } else {
            Err(anyhow::anyhow!("Validation failed with {} fault(s)", report.faults.len()))
        }
    }
}

fn print_text_report(report: &ValidationReport) {
    if report.valid {
        println!("{}", format!("{} is a valid {} manifest", report.file, report.format).green());
        return;
    }

    println!("{}", format!("{} is NOT a valid {} manifest", report.file, report.format).red());
    for fault in &report.faults {
        println!("{}", format!(" * {fault}").red());
    }
}
