//! Shared helpers for integration tests.

use assert_cmd::Command;
use mval_cli::test_utils::ManifestFixture;
use std::path::PathBuf;
use tempfile::TempDir;

/// A temporary directory holding manifest files for one test.
pub struct TestEnvironment {
    pub temp_dir: TempDir,
}

impl TestEnvironment {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            temp_dir: TempDir::new()?,
        })
    }

    /// Write a fixture under its own file name and return the full path.
    pub fn write(&self, fixture: &ManifestFixture) -> anyhow::Result<PathBuf> {
        fixture.write_to(self.temp_dir.path())
    }

    /// Write raw content under `file_name` and return the full path.
    pub fn write_raw(&self, file_name: &str, content: &str) -> anyhow::Result<PathBuf> {
        let path = self.temp_dir.path().join(file_name);
        std::fs::write(&path, content)?;
        Ok(path)
    }

    /// An `mval` command running inside the temporary directory, without colors.
    pub fn mval_command(&self) -> Command {
        let mut cmd = Command::cargo_bin("mval").unwrap();
        cmd.current_dir(self.temp_dir.path()).arg("--no-color").env_remove("RUST_LOG");
        cmd
    }
}
