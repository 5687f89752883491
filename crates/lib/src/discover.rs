//! Locating state files on disk.

use std::fs::File;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::consts::STATE_FILE_EXTENSION;

/// Recursively collect `*.tfstate` files under `dir`, sorted by path.
///
/// Siblings are walked in file-name order, which gives path order overall.
///
/// Unreadable directories are skipped rather than failing the whole walk.
pub fn find_state_files(dir: &Path) -> Vec<PathBuf> {
  WalkDir::new(dir)
    .sort_by_file_name()
    .into_iter()
    .filter_map(|entry| match entry {
      Ok(entry) => Some(entry),
      Err(e) => {
        debug!(error = %e, "skipping unreadable entry");
        None
      }
    })
    .filter(|entry| entry.file_type().is_file())
    .map(|entry| entry.into_path())
    .filter(|path| path.extension().is_some_and(|ext| ext == STATE_FILE_EXTENSION))
    .collect()
}

/// True if `path` exists, is a regular file and can be opened for reading.
pub fn is_readable_state_file(path: &Path) -> bool {
  path.is_file() && File::open(path).is_ok()
}
