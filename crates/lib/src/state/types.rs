use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading, saving or backing up a state file.
///
/// The load-time variants (`NotFound`, `Parse`, `Schema`) are fatal: no
/// partially loaded document is ever handed out.
#[derive(Debug, Error)]
pub enum StateError {
  #[error("state file not found: {}", .0.display())]
  NotFound(PathBuf),

  #[error("failed to read state file: {0}")]
  Read(#[source] io::Error),

  #[error("invalid JSON in state file: {0}")]
  Parse(#[source] serde_json::Error),

  #[error("invalid state file: {0}")]
  Schema(String),

  #[error("failed to serialize state: {0}")]
  Serialize(#[source] serde_json::Error),

  #[error("failed to write {}: {source}", .path.display())]
  Write {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("failed to create backup {}: {source}", .path.display())]
  Backup {
    path: PathBuf,
    #[source]
    source: io::Error,
  },
}
