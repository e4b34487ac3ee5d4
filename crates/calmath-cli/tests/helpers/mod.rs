use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test harness running the CLI inside an isolated working directory
pub struct CliTestHarness {
    temp_dir: TempDir,
}

impl CliTestHarness {
    /// Create a new test harness with an empty working directory
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
        Self { temp_dir }
    }

    /// Get a Command instance with a deterministic environment
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("calmath").expect("Failed to find calmath binary");
        cmd.current_dir(self.temp_dir.path());
        for var in ["RUST_LOG", "CALMATH_START_OF_WEEK", "CALMATH_MONTH_FORMAT", "CALMATH_WEEKDAY_FORMAT"] {
            cmd.env_remove(var);
        }
        cmd.env("CALMATH_LOCALE", "en-US");
        cmd.env("CALMATH_LOG_LEVEL", "error");
        cmd
    }

    pub fn dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write a file into the working directory
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Helper to run a command and assert success
    pub fn run_success(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command().args(args).assert().success()
    }

    /// Helper to run a command and assert failure
    pub fn run_failure(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command().args(args).assert().failure()
    }

    /// Helper to run a command and return its stdout
    pub fn stdout_of(&self, args: &[&str]) -> String {
        let output = self.run_success(args).get_output().stdout.clone();
        String::from_utf8(output).expect("Output is not UTF-8")
    }
}

/// Sample calendar items used across tests
pub struct TestFixtures;

impl TestFixtures {
    pub fn items_json() -> &'static str {
        r#"[
            {"id": "standup", "startDate": "2018-05-06T09:00:00", "title": "Standup", "classes": ["work"]},
            {"id": "holiday", "startDate": "2018-05-07", "endDate": "2018-05-08", "classes": "off public"},
            {"id": "loose", "startDate": "2018/05/09 14h30", "url": "https://example.com/loose"}
        ]"#
    }
}
