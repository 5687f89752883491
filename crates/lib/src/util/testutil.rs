//! Test helpers for tfstate-lib.

use tempfile::TempDir;

use crate::state::StateFile;

/// Three-resource state document: two `aws_instance`s and one `aws_s3_bucket`.
pub const SAMPLE_STATE: &str = include_str!("../../tests/fixtures/sample.tfstate");

/// Write [`SAMPLE_STATE`] to `terraform.tfstate` in a fresh temp directory.
///
/// Keep the returned `TempDir` alive for as long as the file is needed.
pub fn write_sample_state() -> (TempDir, StateFile) {
  write_state(SAMPLE_STATE)
}

pub fn write_state(content: &str) -> (TempDir, StateFile) {
  let temp = TempDir::new().unwrap();
  let path = temp.path().join("terraform.tfstate");
  std::fs::write(&path, content).unwrap();
  (temp, StateFile::new(path))
}
