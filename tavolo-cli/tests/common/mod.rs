//! Common test utilities for CLI integration tests.
//!
//! Provides an isolated test environment: a temporary data directory, a
//! pinned reference clock (2025-05-22 22:19), and helpers for the command
//! invocations the tests repeat.

#![allow(dead_code)]

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// The pinned reference date every test runs under.
pub const TEST_DATE: &str = "2025-05-22";

/// The pinned reference time every test runs under.
pub const TEST_TIME: &str = "22:19";

/// Test environment with an isolated data directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    temp_dir: TempDir,
    /// Path to the tavolo data directory
    pub data_dir: PathBuf,
}

impl TestEnv {
    /// Create a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let data_dir = temp_dir.path().join("tavolo-data");
        Self { temp_dir, data_dir }
    }

    /// A command builder with the data directory and reference clock
    /// pre-configured, and ambient tavolo environment scrubbed.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("tavolo").expect("failed to find tavolo binary");
        cmd.env_remove("TAVOLO_ROLE")
            .env_remove("TAVOLO_USER")
            .env_remove("TAVOLO_DATA_DIR")
            .env_remove("TAVOLO_CONFIG")
            .env_remove("TAVOLO_LOG_MODE")
            // Keep the default config lookup away from any real home.
            .env("HOME", self.temp_dir.path())
            .env("TAVOLO_CURRENT_DATE", TEST_DATE)
            .env("TAVOLO_CURRENT_TIME", TEST_TIME)
            .arg("--data-dir")
            .arg(&self.data_dir);
        cmd
    }

    /// Reserve a table for `customer` and return the printed ID.
    pub fn reserve(&self, customer: &str, table: usize) -> String {
        let output = self
            .command()
            .args(["reserve", "--customer", customer])
            .args(["--phone", "123-456-7890"])
            .args(["--party-size", "4"])
            .args(["--date", "2025-06-01"])
            .args(["--time", "19:00"])
            .args(["--table", &table.to_string()])
            .output()
            .expect("failed to run reserve");
        assert!(
            output.status.success(),
            "reserve failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).trim().to_string()
    }

    /// Capture `list` output for the given role/user.
    pub fn list_as(&self, role: &str, user: &str) -> String {
        let output = self
            .command()
            .args(["--role", role, "--user", user, "list"])
            .output()
            .expect("failed to run list");
        assert!(output.status.success());
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    /// Capture the `tables` board output.
    pub fn tables(&self) -> String {
        let output = self.command().arg("tables").output().expect("failed to run tables");
        assert!(output.status.success());
        String::from_utf8_lossy(&output.stdout).to_string()
    }
}

/// Environment variable pins used by TAVOLO_CURRENT_DATE/TIME must yield
/// this clock in every test: `TEST_DATE` at `TEST_TIME`.
pub fn one_minute_after_reference() -> &'static str {
    "22:20"
}
