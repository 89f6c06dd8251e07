//! Test fixtures for sample manifests
//!
//! Every format has one fixture that validates cleanly plus a few variants
//! that break exactly one rule. Fixtures carry the file name that format
//! detection expects, so `write_to` produces a file that `mval` recognizes
//! without `--type`.

use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

use crate::manifest::ManifestFormat;

/// A sample manifest file.
#[derive(Clone, Debug)]
pub struct ManifestFixture {
    /// Short fixture name for assertion messages
    pub name: String,
    /// File name the fixture is written as
    pub file_name: String,
    /// Format the content is meant to be validated as
    pub format: ManifestFormat,
    /// Raw file content
    pub content: String,
}

impl ManifestFixture {
    fn new(name: &str, file_name: &str, format: ManifestFormat, content: &str) -> Self {
        Self {
            name: name.to_string(),
            file_name: file_name.to_string(),
            format,
            content: content.trim().to_string(),
        }
    }

    /// Valid jQuery plugin manifest
    pub fn jquery() -> Self {
        Self::new(
            "jquery",
            "color.jquery.json",
            ManifestFormat::Jquery,
            r#"
{
    "name": "color",
    "title": "jQuery Color",
    "description": "jQuery plugin for color manipulation and animation support.",
    "keywords": ["color", "animation"],
    "version": "2.1.2",
    "author": {
        "name": "jQuery Foundation and other contributors",
        "url": "https://github.com/jquery/jquery-color/blob/2.1.2/AUTHORS.txt"
    },
    "maintainers": [
        {
            "name": "Corey Frang",
            "email": "gnarf37@gmail.com",
            "url": "http://gnarf.net"
        }
    ],
    "licenses": [
        {
            "type": "MIT",
            "url": "https://github.com/jquery/jquery-color/blob/2.1.2/MIT-LICENSE.txt"
        }
    ],
    "bugs": "https://github.com/jquery/jquery-color/issues",
    "homepage": "https://github.com/jquery/jquery-color",
    "dependencies": {
        "jquery": ">=1.5"
    }
}
"#,
        )
    }

    /// Valid Composer manifest
    pub fn composer() -> Self {
        Self::new(
            "composer",
            "composer.json",
            ManifestFormat::Composer,
            r#"
{
    "name": "monolog/monolog",
    "description": "Sends your logs to files, sockets, inboxes, databases and various web services",
    "keywords": ["log", "logging", "psr-3"],
    "homepage": "http://github.com/Seldaek/monolog",
    "type": "library",
    "license": "MIT",
    "time": "2013-11-14",
    "version": "1.7.0",
    "authors": [
        {
            "name": "Jordi Boggiano",
            "email": "j.boggiano@seld.be",
            "homepage": "http://seld.be"
        }
    ],
    "require": {
        "php": ">=5.3.0",
        "psr/log": "~1.0"
    },
    "require-dev": {
        "phpunit/phpunit": "~3.7.0",
        "mlehner/gelf-php": "1.0.*"
    },
    "replace": {
        "monolog/legacy": "dev-master"
    }
}
"#,
        )
    }

    /// Composer manifest whose only problem is one unparseable constraint
    pub fn composer_with_bad_dependency() -> Self {
        let mut fixture = Self::composer();
        fixture.name = "composer_with_bad_dependency".to_string();
        fixture.content = fixture.content.replace(r#""psr/log": "~1.0""#, r#""psr/log": "not-a-version""#);
        fixture
    }

    /// Valid npm package manifest
    pub fn npm() -> Self {
        Self::new(
            "npm",
            "package.json",
            ManifestFormat::Npm,
            r#"
{
    "name": "left-pad",
    "version": "1.3.0",
    "description": "String left pad",
    "main": "index.js",
    "engine": "node >=0.10",
    "author": {
        "name": "azer",
        "email": "azer@roadbeats.com",
        "url": "http://azer.io"
    },
    "repository": {
        "type": "git",
        "url": "https://github.com/stevemao/left-pad.git"
    },
    "bugs": {
        "url": "https://github.com/stevemao/left-pad/issues"
    },
    "homepage": "https://github.com/stevemao/left-pad#readme",
    "license": "WTFPL",
    "dependencies": {
        "debug": "^2.6.9"
    },
    "devDependencies": {
        "tape": "*",
        "benchmark": "2.x || >=3.0.0 <4.0.0"
    }
}
"#,
        )
    }

    /// npm manifest with a broken author e-mail
    pub fn npm_with_bad_email() -> Self {
        let mut fixture = Self::npm();
        fixture.name = "npm_with_bad_email".to_string();
        fixture.content = fixture.content.replace("azer@roadbeats.com", "azer-at-roadbeats");
        fixture
    }

    /// npm manifest that is not valid JSON
    pub fn malformed_json() -> Self {
        Self::new("malformed_json", "package.json", ManifestFormat::Npm, r#"{ "name": "left-pad", "#)
    }

    /// Valid WordPress plugin readme
    pub fn wordpress() -> Self {
        Self::new(
            "wordpress",
            "readme.txt",
            ManifestFormat::Wordpress,
            r"
=== Hello Dolly ===
Contributors: matt
Donate link: https://example.com/donate
Plugin URI: http://wordpress.org/plugins/hello-dolly/
Author URI: http://ma.tt/
Tags: lyrics, music
Requires at least: 3.0
Tested up to: 4.9
Stable tag: 1.7.2
License: GPLv2 or later
License URI: https://www.gnu.org/licenses/gpl-2.0.html

This is not just a plugin, it symbolizes the hope and enthusiasm of an entire generation.

== Description ==

Hello, Dolly in the upper right of your admin screen on every page.
",
        )
    }

    /// WordPress readme released from trunk instead of a tag
    pub fn wordpress_with_trunk_stable_tag() -> Self {
        let mut fixture = Self::wordpress();
        fixture.name = "wordpress_with_trunk_stable_tag".to_string();
        fixture.content = fixture.content.replace("Stable tag: 1.7.2", "Stable tag: trunk");
        fixture
    }

    /// Valid Android manifest
    pub fn android() -> Self {
        Self::new(
            "android",
            "AndroidManifest.xml",
            ManifestFormat::Android,
            r#"
<?xml version="1.0" encoding="utf-8"?>
<manifest xmlns:android="http://schemas.android.com/apk/res/android"
    package="com.example.notes"
    android:versionCode="7"
    android:versionName="2.0.1">
    <uses-permission android:name="android.permission.INTERNET" />
    <uses-permission android:name="android.permission.READ_CONTACTS" />
    <application android:label="Notes" android:hardwareAccelerated="true">
        <activity android:name=".NotesList" android:exported="true">
            <intent-filter>
                <action android:name="android.intent.action.VIEW" />
                <category android:name="android.intent.category.DEFAULT" />
                <data android:mimeType="text/plain" />
            </intent-filter>
            <intent-filter>
                <action android:name="android.intent.action.MAIN" />
                <category android:name="android.intent.category.LAUNCHER" />
            </intent-filter>
        </activity>
        <provider android:name="com.example.notes.NotePadProvider" android:syncable="false" />
        <service android:name=".SyncService" android:exported="false">
            <intent-filter>
                <action android:name="com.example.notes.SYNC" />
                <data android:scheme="content" android:port="8080" />
            </intent-filter>
        </service>
    </application>
</manifest>
"#,
        )
    }

    /// Android manifest without any `<application>` element
    pub fn android_without_application() -> Self {
        Self::new(
            "android_without_application",
            "AndroidManifest.xml",
            ManifestFormat::Android,
            r#"
<?xml version="1.0" encoding="utf-8"?>
<manifest xmlns:android="http://schemas.android.com/apk/res/android"
    package="com.example.empty"
    android:versionName="1.0.0">
    <uses-permission android:name="android.permission.INTERNET" />
</manifest>
"#,
        )
    }

    /// Android manifest with two `<application>` elements
    pub fn android_with_two_applications() -> Self {
        Self::new(
            "android_with_two_applications",
            "AndroidManifest.xml",
            ManifestFormat::Android,
            r#"
<?xml version="1.0" encoding="utf-8"?>
<manifest xmlns:android="http://schemas.android.com/apk/res/android" package="com.example.twice">
    <application android:label="One" />
    <application android:label="Two" />
</manifest>
"#,
        )
    }

    /// The valid fixture of every format, in detection order.
    pub fn all_valid() -> Vec<Self> {
        vec![Self::jquery(), Self::composer(), Self::wordpress(), Self::npm(), Self::android()]
    }

    /// Parse the content as JSON (JSON formats only).
    pub fn value(&self) -> Result<Value> {
        serde_json::from_str(&self.content)
            .with_context(|| format!("Fixture '{}' is not valid JSON", self.name))
    }

    /// Copy of this JSON fixture with one top-level field removed, keeping key order.
    pub fn without_field(&self, field: &str) -> Result<Self> {
        let Value::Object(map) = self.value()? else {
            anyhow::bail!("Fixture '{}' is not a JSON object", self.name);
        };
        let stripped: serde_json::Map<String, Value> =
            map.into_iter().filter(|(key, _)| key != field).collect();

        Ok(Self {
            name: format!("{}_without_{}", self.name, field),
            content: serde_json::to_string_pretty(&Value::Object(stripped))?,
            ..self.clone()
        })
    }

    /// Write the manifest into `dir` under its detectable file name.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(&self.file_name);
        fs::write(&path, &self.content)
            .with_context(|| format!("Failed to write fixture to {}", path.display()))?;
        Ok(path)
    }
}
