//! Shared test helpers for CLI integration tests.

use std::path::PathBuf;

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use serde_json::Value;
use tempfile::TempDir;

/// Get path to a fixture file.
pub fn fixture_path(name: &str) -> PathBuf {
  PathBuf::from(env!("CARGO_MANIFEST_DIR"))
    .join("tests")
    .join("fixtures")
    .join(name)
}

/// Read fixture content.
pub fn fixture_content(name: &str) -> String {
  std::fs::read_to_string(fixture_path(name)).unwrap_or_else(|e| panic!("Failed to load fixture {}: {}", name, e))
}

/// Isolated test environment.
///
/// Each test gets its own temporary directory holding a copy of a state file.
pub struct TestEnv {
  pub temp: TempDir,
  pub state_path: PathBuf,
}

impl TestEnv {
  /// Copy a fixture to `terraform.tfstate` in a fresh temp directory.
  pub fn from_fixture(name: &str) -> Self {
    let env = Self::empty();
    std::fs::write(&env.state_path, fixture_content(name)).unwrap();
    env
  }

  /// Temp directory without a state file.
  pub fn empty() -> Self {
    let temp = TempDir::new().unwrap();
    let state_path = temp.path().join("terraform.tfstate");
    Self { temp, state_path }
  }

  /// Write a file relative to the temp directory.
  pub fn write_file(&self, relative_path: &str, content: &str) {
    let path = self.temp.path().join(relative_path);
    if let Some(parent) = path.parent() {
      std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, content).unwrap();
  }

  /// Current state file parsed as JSON.
  pub fn state_json(&self) -> Value {
    serde_json::from_str(&std::fs::read_to_string(&self.state_path).unwrap()).unwrap()
  }

  /// `(type, name)` of every resource, in file order.
  pub fn addresses(&self) -> Vec<String> {
    self.state_json()["resources"]
      .as_array()
      .unwrap()
      .iter()
      .map(|r| format!("{}.{}", r["type"].as_str().unwrap(), r["name"].as_str().unwrap()))
      .collect()
  }

  /// Backup files created next to the state file.
  pub fn backups(&self) -> Vec<PathBuf> {
    std::fs::read_dir(self.temp.path())
      .unwrap()
      .map(|e| e.unwrap().path())
      .filter(|p| p.to_string_lossy().contains(".backup_"))
      .collect()
  }

  /// Get a pre-configured Command for the tfstate binary.
  ///
  /// Clears `TFSTATE_BACKUP` and `TFSTATE_LOG` so the host environment does
  /// not leak into assertions.
  pub fn tfstate_cmd(&self) -> Command {
    let mut cmd: Command = cargo_bin_cmd!("tfstate");
    cmd.env_remove("TFSTATE_BACKUP");
    cmd.env_remove("TFSTATE_LOG");
    cmd.current_dir(self.temp.path());
    cmd
  }
}
