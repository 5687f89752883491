//! Read and edit operations on a loaded state file.
//!
//! The bare operations (`get`, `export`, `modify`, `move_resource`,
//! `delete`) change only the in-memory document. [`StateEditor::apply`]
//! wraps them in the full edit sequence: precheck, confirmation, backup,
//! change, save.

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::attr::{self, AttrPath};
use crate::config::EditOptions;
use crate::state::{
  Address, ResourceFilter, ResourceSummary, StateDocument, StateError, StateFile, ValidationReport, write_json,
};

use super::types::{Confirm, Edit, EditError, EditOutcome, EditReport, ExportOutcome};

#[derive(Debug, Clone)]
pub struct StateEditor {
  file: StateFile,
  doc: StateDocument,
}

impl StateEditor {
  /// Load the state file at `path`.
  pub fn open(path: impl Into<PathBuf>) -> Result<Self, StateError> {
    let file = StateFile::new(path);
    let doc = file.load()?;
    Ok(Self { file, doc })
  }

  pub fn new(file: StateFile, doc: StateDocument) -> Self {
    Self { file, doc }
  }

  pub fn file(&self) -> &StateFile {
    &self.file
  }

  pub fn document(&self) -> &StateDocument {
    &self.doc
  }

  pub fn list(&self, filter: &ResourceFilter) -> Vec<ResourceSummary> {
    self.doc.list(filter)
  }

  pub fn validate(&self) -> ValidationReport {
    self.doc.validate()
  }

  /// The first resource at `address`, if any.
  pub fn get(&self, address: &str) -> Result<Option<&Value>, EditError> {
    let address = Address::parse(address)?;
    Ok(self.doc.find(&address))
  }

  /// The value at `path` inside the resource at `address`.
  ///
  /// `None` when the resource or a key along the path is missing.
  pub fn get_attribute(&self, address: &str, path: &str) -> Result<Option<&Value>, EditError> {
    let path = AttrPath::parse(path)?;
    match self.get(address)? {
      Some(resource) => Ok(attr::read_at(resource, &path)?),
      None => Ok(None),
    }
  }

  /// Write the resource at `address` to `dest` as pretty JSON.
  ///
  /// Returns `false` when there is no such resource.
  pub fn export(&self, address: &str, dest: &Path) -> Result<bool, EditError> {
    let Some(resource) = self.get(address)? else {
      return Ok(false);
    };
    write_json(dest, resource)?;
    info!(address, dest = %dest.display(), "exported resource");
    Ok(true)
  }

  /// Set the attribute at `path` inside the resource at `address`.
  ///
  /// Returns `false` when there is no such resource. Navigation failures
  /// are returned as [`EditError::Path`] and leave the document unchanged.
  pub fn modify(&mut self, address: &str, path: &str, value: Value) -> Result<bool, EditError> {
    let addr = Address::parse(address)?;
    let Some(resource) = self.doc.find_mut(&addr) else {
      debug!(address, "resource not found");
      return Ok(false);
    };
    let path = AttrPath::parse(path)?;
    attr::set_path(resource, &path, value)?;
    debug!(address, path = %path, "modified attribute");
    Ok(true)
  }

  /// Rename the resource at `from` to `to`.
  ///
  /// Returns `false` when `from` does not exist; fails with
  /// [`EditError::Collision`] when `to` is already taken.
  pub fn move_resource(&mut self, from: &str, to: &str) -> Result<bool, EditError> {
    let old = Address::parse(from)?;
    let new = Address::parse(to)?;
    let moved = self.doc.rename(&old, &new)?;
    if moved {
      debug!(from, to, "renamed resource");
    }
    Ok(moved)
  }

  /// Remove every resource at `address`. Returns whether anything was removed.
  pub fn delete(&mut self, address: &str) -> Result<bool, EditError> {
    let addr = Address::parse(address)?;
    let removed = self.doc.remove(&addr);
    if removed {
      debug!(address, "removed resource");
    }
    Ok(removed)
  }

  /// Write the in-memory document back to its file.
  pub fn save(&self) -> Result<(), StateError> {
    self.file.save(&self.doc)
  }

  /// Copy the on-disk file aside. See [`StateFile::backup`].
  pub fn backup(&self) -> Result<PathBuf, StateError> {
    self.file.backup()
  }

  /// Run `edit` with the full safety sequence.
  ///
  /// 1. precheck: the resource must exist, a move target must be free and a
  ///    modify path must be writable
  /// 2. confirmation, unless `options.force`
  /// 3. backup of the on-disk file, if `options.backup`
  /// 4. the change itself
  /// 5. save
  ///
  /// Nothing is written when the edit stops before step 4.
  pub fn apply(&mut self, edit: &Edit, options: &EditOptions, confirm: &mut dyn Confirm) -> Result<EditReport, EditError> {
    if let Some(blocked) = self.precheck(edit)? {
      warn!(edit = %edit, outcome = ?blocked, "edit rejected");
      return Ok(EditReport::without_backup(blocked));
    }

    if !options.force && !confirm.confirm(&edit.prompt()).map_err(EditError::Prompt)? {
      debug!(edit = %edit, "edit cancelled");
      return Ok(EditReport::without_backup(EditOutcome::Cancelled));
    }

    let backup = if options.backup { Some(self.backup()?) } else { None };

    let changed = match edit {
      Edit::Modify { address, path, value } => self.modify(address, path, value.clone())?,
      Edit::Move { from, to } => self.move_resource(from, to)?,
      Edit::Delete { address } => self.delete(address)?,
    };
    if !changed {
      return Ok(EditReport {
        outcome: EditOutcome::NotFound(edit.address().to_string()),
        backup,
      });
    }

    self.save()?;
    info!(edit = %edit, "edit applied");
    Ok(EditReport {
      outcome: EditOutcome::Applied,
      backup,
    })
  }

  /// Export the resource at `address` to `dest`, asking before an existing
  /// file is overwritten (unless `options.force`).
  pub fn export_to(
    &self,
    address: &str,
    dest: &Path,
    options: &EditOptions,
    confirm: &mut dyn Confirm,
  ) -> Result<ExportOutcome, EditError> {
    if self.get(address)?.is_none() {
      return Ok(ExportOutcome::NotFound(address.to_string()));
    }
    if dest.exists() && !options.force {
      let prompt = format!("File {} exists. Overwrite?", dest.display());
      if !confirm.confirm(&prompt).map_err(EditError::Prompt)? {
        return Ok(ExportOutcome::Cancelled);
      }
    }
    if self.export(address, dest)? {
      Ok(ExportOutcome::Exported(dest.to_path_buf()))
    } else {
      Ok(ExportOutcome::NotFound(address.to_string()))
    }
  }

  fn precheck(&self, edit: &Edit) -> Result<Option<EditOutcome>, EditError> {
    let Some(resource) = self.get(edit.address())? else {
      return Ok(Some(EditOutcome::NotFound(edit.address().to_string())));
    };
    match edit {
      Edit::Modify { path, .. } => {
        attr::check_writable(resource, &AttrPath::parse(path)?)?;
      }
      Edit::Move { to, .. } => {
        if self.get(to)?.is_some() {
          return Ok(Some(EditOutcome::TargetExists(to.clone())));
        }
      }
      Edit::Delete { .. } => {}
    }
    Ok(None)
  }
}
