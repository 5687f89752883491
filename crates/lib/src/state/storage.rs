//! Reading and writing state files on disk.
//!
//! # Layout
//!
//! ```text
//! ./
//! ├── terraform.tfstate                         # the state file
//! └── terraform.tfstate.backup_20240131_154502  # copy taken before an edit
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::consts::{BACKUP_INFIX, BACKUP_TIMESTAMP_FORMAT};

use super::document::StateDocument;
use super::types::StateError;

/// Handle to a state file on disk.
///
/// Holds no content; every call goes to the filesystem. There is no locking,
/// so concurrent writers race and the last `save` wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateFile {
  path: PathBuf,
}

impl StateFile {
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self { path: path.into() }
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  pub fn exists(&self) -> bool {
    self.path.exists()
  }

  /// Size of the file in bytes.
  pub fn size(&self) -> Result<u64, StateError> {
    fs::metadata(&self.path).map(|m| m.len()).map_err(|e| self.read_error(e))
  }

  /// Read and parse the file as generic JSON, without schema checks.
  pub fn read_value(&self) -> Result<Value, StateError> {
    let content = fs::read_to_string(&self.path).map_err(|e| self.read_error(e))?;
    serde_json::from_str(&content).map_err(StateError::Parse)
  }

  /// Load the file as a [`StateDocument`].
  pub fn load(&self) -> Result<StateDocument, StateError> {
    let doc = StateDocument::from_value(self.read_value()?)?;
    debug!(path = %self.path.display(), resources = doc.resources().len(), "loaded state file");
    Ok(doc)
  }

  /// Overwrite the file with `doc`, pretty-printed.
  pub fn save(&self, doc: &StateDocument) -> Result<(), StateError> {
    let content = doc.to_json_pretty()?;
    fs::write(&self.path, content).map_err(|source| StateError::Write {
      path: self.path.clone(),
      source,
    })?;
    info!(path = %self.path.display(), "saved state file");
    Ok(())
  }

  /// Copy the file as it currently is on disk to a timestamped sibling.
  ///
  /// This snapshots disk content, not any in-memory edits, so call it before
  /// mutating and saving.
  pub fn backup(&self) -> Result<PathBuf, StateError> {
    let backup_path = self.backup_path_at(&Local::now());
    fs::copy(&self.path, &backup_path).map_err(|source| StateError::Backup {
      path: backup_path.clone(),
      source,
    })?;
    info!(backup = %backup_path.display(), "created backup");
    Ok(backup_path)
  }

  /// `<path>.backup_<YYYYMMDD_HHMMSS>` for the given instant.
  pub fn backup_path_at(&self, at: &DateTime<Local>) -> PathBuf {
    let mut name = self.path.as_os_str().to_owned();
    name.push(BACKUP_INFIX);
    name.push(at.format(BACKUP_TIMESTAMP_FORMAT).to_string());
    PathBuf::from(name)
  }

  fn read_error(&self, e: io::Error) -> StateError {
    if e.kind() == io::ErrorKind::NotFound {
      StateError::NotFound(self.path.clone())
    } else {
      StateError::Read(e)
    }
  }
}

/// Write any serializable value as pretty JSON to `path`, replacing it.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), StateError> {
  let content = serde_json::to_string_pretty(value).map_err(StateError::Serialize)?;
  fs::write(path, content).map_err(|source| StateError::Write {
    path: path.to_path_buf(),
    source,
  })
}
