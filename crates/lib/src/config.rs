//! Runtime configuration from the environment.
//!
//! Command-line flags are layered on top by the caller.

use std::env;

/// Set to `0`, `false`, `no` or `off` to disable pre-edit backups.
pub const BACKUP_ENV: &str = "TFSTATE_BACKUP";

/// Log filter in `tracing_subscriber::EnvFilter` syntax.
pub const LOG_ENV: &str = "TFSTATE_LOG";

pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Settings for guarded edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditOptions {
  /// Skip the confirmation step.
  pub force: bool,
  /// Copy the on-disk file aside before saving an edit.
  pub backup: bool,
}

impl Default for EditOptions {
  fn default() -> Self {
    Self {
      force: false,
      backup: true,
    }
  }
}

impl EditOptions {
  /// Defaults adjusted by [`BACKUP_ENV`].
  pub fn from_env() -> Self {
    Self {
      backup: backups_enabled(),
      ..Self::default()
    }
  }

  pub fn with_force(mut self, force: bool) -> Self {
    self.force = force;
    self
  }

  /// Disable backups when `no_backup` is set; never re-enables them.
  pub fn with_no_backup(mut self, no_backup: bool) -> Self {
    if no_backup {
      self.backup = false;
    }
    self
  }
}

pub fn backups_enabled() -> bool {
  match env::var(BACKUP_ENV) {
    Ok(value) => !matches!(value.trim().to_ascii_lowercase().as_str(), "0" | "false" | "no" | "off"),
    Err(_) => true,
  }
}

pub fn log_filter() -> String {
  env::var(LOG_ENV)
    .ok()
    .filter(|v| !v.trim().is_empty())
    .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}
