//! Supported manifest formats and file-name based detection.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::core::MvalError;

/// One of the manifest formats mval knows how to validate.
///
/// Each format carries the file-name pattern used for detection and whether
/// its content is JSON (validated as a structured value) or text (validated
/// from the raw file content).
///
/// # Examples
///
/// ```rust
/// use mval_cli::manifest::ManifestFormat;
///
/// let format: ManifestFormat = "Composer".parse()?;
/// assert_eq!(format, ManifestFormat::Composer);
/// assert_eq!(format.pattern(), "composer.json");
/// assert!(format.is_structured());
/// assert_eq!(format.to_string(), "COMPOSER");
/// # Ok::<(), mval_cli::core::MvalError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ManifestFormat {
    /// jQuery plugin descriptor (`<plugin>.jquery.json`)
    Jquery,
    /// PHP Composer descriptor (`composer.json`)
    Composer,
    /// WordPress plugin readme (`readme.txt`)
    Wordpress,
    /// npm package descriptor (`package.json`)
    Npm,
    /// Android application manifest (`AndroidManifest.xml`)
    Android,
}

/// Detection table. Order matters: the first matching pattern wins.
const FORMAT_TABLE: &[ManifestFormat] = &[
    ManifestFormat::Jquery,
    ManifestFormat::Composer,
    ManifestFormat::Wordpress,
    ManifestFormat::Npm,
    ManifestFormat::Android,
];

impl ManifestFormat {
    /// All formats in detection order.
    #[must_use]
    pub const fn all() -> &'static [ManifestFormat] {
        FORMAT_TABLE
    }

    /// File-name pattern that identifies this format.
    #[must_use]
    pub const fn pattern(self) -> &'static str {
        match self {
            Self::Jquery => ".jquery.json",
            Self::Composer => "composer.json",
            Self::Wordpress => "readme.txt",
            Self::Npm => "package.json",
            Self::Android => "AndroidManifest.xml",
        }
    }

    /// Whether the content is JSON and validated as a structured value.
    #[must_use]
    pub const fn is_structured(self) -> bool {
        matches!(self, Self::Jquery | Self::Composer | Self::Npm)
    }

    /// Lower-case tag accepted by [`FromStr`] and the CLI `--type` flag.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Jquery => "jquery",
            Self::Composer => "composer",
            Self::Wordpress => "wordpress",
            Self::Npm => "npm",
            Self::Android => "android",
        }
    }
}

impl fmt::Display for ManifestFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag().to_uppercase())
    }
}

impl FromStr for ManifestFormat {
    type Err = MvalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        FORMAT_TABLE.iter().copied().find(|format| format.tag().eq_ignore_ascii_case(wanted)).ok_or_else(
            || MvalError::UnknownFormat {
                tag: s.to_string(),
            },
        )
    }
}

/// Detect the manifest format from a file name or path.
///
/// Returns the first format, in table order, whose pattern is a substring of
/// `name`. Matching is case-sensitive. When several patterns match, table order
/// (jQuery, Composer, WordPress, npm, Android) decides.
///
/// # Examples
///
/// ```rust
/// use mval_cli::manifest::{ManifestFormat, detect_format};
///
/// assert_eq!(detect_format("my/package.json"), Some(ManifestFormat::Npm));
/// assert_eq!(detect_format("AndroidManifest.xml"), Some(ManifestFormat::Android));
/// assert_eq!(detect_format("unknown.cfg"), None);
/// ```
#[must_use]
pub fn detect_format(name: &str) -> Option<ManifestFormat> {
    let detected = FORMAT_TABLE.iter().copied().find(|format| name.contains(format.pattern()));
    tracing::trace!("detected format {:?} for '{}'", detected, name);
    detected
}
