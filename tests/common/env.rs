//! Test environment for isolated LookAtMe testing.
//!
//! Provides `TestEnv` - a temp data directory (`LOOKATME_HOME`) and a temp
//! work directory for files to import, plus helpers to run the CLI.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

use lookatme::{AssetLibrary, BuiltinAssets, TomlAssetStore};

/// Result of running a LookAtMe CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as one JSON document
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(self.stdout.trim())
            .unwrap_or_else(|e| panic!("stdout is not JSON ({}):\n{}", e, self.stdout))
    }
}

pub struct TestEnv {
    /// Data root handed to the CLI via `LOOKATME_HOME`
    pub data_dir: TempDir,
    /// Scratch space for files the user "picks"
    pub work_dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            data_dir: TempDir::new().expect("Failed to create data dir"),
            work_dir: TempDir::new().expect("Failed to create work dir"),
        }
    }

    pub fn data_path(&self, relative: &str) -> PathBuf {
        self.data_dir.path().join(relative)
    }

    pub fn settings_path(&self) -> PathBuf {
        self.data_path("settings.toml")
    }

    /// Write a file the user can import
    pub fn write_work_file(&self, name: &str, bytes: &[u8]) -> PathBuf {
        let path = self.work_dir.path().join(name);
        std::fs::write(&path, bytes).expect("Failed to write work file");
        path
    }

    /// Library over this environment's data root
    pub fn library(&self) -> AssetLibrary<BuiltinAssets, TomlAssetStore> {
        AssetLibrary::new(
            BuiltinAssets::new(),
            TomlAssetStore::new(self.data_dir.path()),
            self.settings_path(),
        )
    }

    /// Run the CLI against this environment
    pub fn run(&self, args: &[&str]) -> TestResult {
        let output = Command::new(env!("CARGO_BIN_EXE_lookatme"))
            .current_dir(self.work_dir.path())
            .args(args)
            .env("LOOKATME_HOME", self.data_dir.path())
            .env_remove("LOOKATME_VIBRATION_AMPLITUDE")
            .env_remove("LOOKATME_CRACK_DELAY")
            .env_remove("LOOKATME_SOUND_DELAY")
            .output()
            .expect("Failed to execute lookatme");

        output_to_result(output)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

/// Assert that `path` lives directly in `<data>/<dir>/`
pub fn assert_in_private_dir(env: &TestEnv, dir: &str, path: &Path) {
    assert_eq!(
        path.parent(),
        Some(env.data_path(dir).as_path()),
        "{} is not in private {} storage",
        path.display(),
        dir
    );
}
