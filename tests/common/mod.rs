#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Get the path to a test fixture file
pub fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Helper struct to run ticketboard commands in an isolated temp directory
pub struct BoardTest {
    pub temp_dir: TempDir,
    binary_path: PathBuf,
}

impl BoardTest {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        BoardTest {
            temp_dir,
            binary_path: PathBuf::from(env!("CARGO_BIN_EXE_ticketboard")),
        }
    }

    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(&self.binary_path)
            .args(args)
            .current_dir(self.temp_dir.path())
            .env_remove("TICKETBOARD_ROOT")
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to execute ticketboard command")
    }

    pub fn run_success(&self, args: &[&str]) -> String {
        let output = self.run(args);
        if !output.status.success() {
            panic!(
                "Command {:?} failed with status {:?}\nstdout: {}\nstderr: {}",
                args,
                output.status,
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr)
            );
        }
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    pub fn run_failure(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            !output.status.success(),
            "Expected command {:?} to fail, but it succeeded",
            args
        );
        String::from_utf8_lossy(&output.stderr).to_string()
    }

    /// Run and parse stdout as JSON
    pub fn run_json(&self, args: &[&str]) -> serde_json::Value {
        let output = self.run_success(args);
        serde_json::from_str(&output).expect("Failed to parse JSON output")
    }

    /// Write a payload file into the temp directory and return its path as a string
    pub fn write_payload(&self, name: &str, content: &str) -> String {
        let path = self.temp_dir.path().join(name);
        fs::write(&path, content).expect("Failed to write payload");
        path.to_string_lossy().to_string()
    }

    pub fn config_path(&self) -> PathBuf {
        self.temp_dir.path().join(".ticketboard").join("config.yaml")
    }

    pub fn read_config(&self) -> String {
        fs::read_to_string(self.config_path()).expect("Failed to read config file")
    }
}

/// Column keys from a `board --json` document
pub fn column_keys(board: &serde_json::Value) -> Vec<String> {
    board["columns"]
        .as_array()
        .expect("columns array")
        .iter()
        .map(|c| c["key"].as_str().expect("column key").to_string())
        .collect()
}

/// Ticket ids of one column from a `board --json` document
pub fn column_ids(board: &serde_json::Value, key: &str) -> Vec<String> {
    board["columns"]
        .as_array()
        .expect("columns array")
        .iter()
        .find(|c| c["key"] == key)
        .unwrap_or_else(|| panic!("column {key} missing"))["tickets"]
        .as_array()
        .expect("tickets array")
        .iter()
        .map(|t| t["id"].as_str().expect("ticket id").to_string())
        .collect()
}
