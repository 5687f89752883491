use std::fmt;
use std::io;
use std::path::PathBuf;

use serde_json::Value;
use thiserror::Error;

use crate::attr::PathError;
use crate::state::{AddressError, IndexError, StateError};

#[derive(Debug, Error)]
pub enum EditError {
  #[error(transparent)]
  Address(#[from] AddressError),

  #[error(transparent)]
  Path(#[from] PathError),

  #[error(transparent)]
  Collision(#[from] IndexError),

  #[error(transparent)]
  State(#[from] StateError),

  #[error("confirmation failed: {0}")]
  Prompt(#[source] io::Error),
}

/// Caller-supplied confirmation step for destructive operations.
///
/// The library never reads input itself; the CLI passes a terminal prompt,
/// tests pass closures.
pub trait Confirm {
  fn confirm(&mut self, prompt: &str) -> io::Result<bool>;
}

impl<F> Confirm for F
where
  F: FnMut(&str) -> io::Result<bool>,
{
  fn confirm(&mut self, prompt: &str) -> io::Result<bool> {
    self(prompt)
  }
}

/// A mutation to run through [`super::StateEditor::apply`].
#[derive(Debug, Clone, PartialEq)]
pub enum Edit {
  Modify { address: String, path: String, value: Value },
  Move { from: String, to: String },
  Delete { address: String },
}

impl Edit {
  /// The address that must exist for the edit to proceed.
  pub fn address(&self) -> &str {
    match self {
      Edit::Modify { address, .. } | Edit::Delete { address } => address,
      Edit::Move { from, .. } => from,
    }
  }

  /// Question shown before the edit is applied.
  pub fn prompt(&self) -> String {
    match self {
      Edit::Modify { .. } => "Continue with modification?".to_string(),
      Edit::Move { .. } => "Continue with move?".to_string(),
      Edit::Delete { .. } => "Are you sure you want to continue?".to_string(),
    }
  }
}

impl fmt::Display for Edit {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Edit::Modify { address, path, value } => write!(f, "Modifying {}:{} = {}", address, path, value),
      Edit::Move { from, to } => write!(f, "Moving {} → {}", from, to),
      Edit::Delete { address } => write!(f, "Deleting {} from the state file", address),
    }
  }
}

/// How a guarded edit ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
  Applied,
  Cancelled,
  /// No resource at the given address.
  NotFound(String),
  /// A move target is already occupied.
  TargetExists(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditReport {
  pub outcome: EditOutcome,
  /// Backup taken before saving, if any.
  pub backup: Option<PathBuf>,
}

impl EditReport {
  pub(crate) fn without_backup(outcome: EditOutcome) -> Self {
    Self { outcome, backup: None }
  }

  pub fn is_applied(&self) -> bool {
    self.outcome == EditOutcome::Applied
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
  Exported(PathBuf),
  NotFound(String),
  Cancelled,
}
