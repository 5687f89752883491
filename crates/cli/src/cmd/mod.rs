mod delete;
mod export;
mod find;
mod list;
mod modify;
mod move_resource;
mod show;
mod validate;

pub use delete::cmd_delete;
pub use export::cmd_export;
pub use find::cmd_find;
pub use list::cmd_list;
pub use modify::cmd_modify;
pub use move_resource::cmd_move;
pub use show::cmd_show;
pub use validate::cmd_validate;

use std::path::Path;

use anyhow::{Context, Result, bail};
use tfstate_lib::config::EditOptions;
use tfstate_lib::discover::is_readable_state_file;
use tfstate_lib::edit::{Edit, EditOutcome, StateEditor};
use tracing::debug;

use crate::output::{print_info, print_success, print_warning};
use crate::prompts;

pub(crate) fn ensure_readable(path: &Path) -> Result<()> {
  if !is_readable_state_file(path) {
    bail!("State file not found or not readable: {}", path.display());
  }
  Ok(())
}

pub(crate) fn open_state(path: &Path) -> Result<StateEditor> {
  ensure_readable(path)?;
  debug!(path = %path.display(), "opening state file");
  StateEditor::open(path).with_context(|| format!("Failed to load state file {}", path.display()))
}

/// Edit options from the environment with per-command flags on top.
pub(crate) fn edit_options(force: bool, no_backup: bool) -> EditOptions {
  EditOptions::from_env().with_force(force).with_no_backup(no_backup)
}

/// Run a guarded edit and report its outcome.
///
/// `notice` is shown whenever the target resource exists, with or without
/// `--force`; `success` after the edit was saved.
pub(crate) fn run_edit(state: &Path, edit: &Edit, options: EditOptions, notice: &[String], success: &str) -> Result<()> {
  let mut editor = open_state(state)?;

  if editor.get(edit.address())?.is_some() {
    for line in notice {
      print_warning(line);
    }
  }

  let report = editor
    .apply(edit, &options, &mut prompts::confirm)
    .with_context(|| format!("Failed to apply edit ({})", edit))?;

  if let Some(backup) = &report.backup {
    print_info(&format!("Backup created: {}", backup.display()));
  }

  match report.outcome {
    EditOutcome::Applied => {
      print_success(success);
      Ok(())
    }
    EditOutcome::Cancelled => bail!("{} cancelled", edit_noun(edit)),
    EditOutcome::NotFound(address) => bail!("Resource {} not found", address),
    EditOutcome::TargetExists(address) => bail!("Resource {} already exists", address),
  }
}

fn edit_noun(edit: &Edit) -> &'static str {
  match edit {
    Edit::Modify { .. } => "Modification",
    Edit::Move { .. } => "Move",
    Edit::Delete { .. } => "Deletion",
  }
}
