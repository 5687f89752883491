use std::path::Path;

use anyhow::Result;
use tfstate_lib::edit::Edit;

use crate::cmd::{edit_options, run_edit};

pub fn cmd_move(state: &Path, from: &str, to: &str, force: bool, no_backup: bool) -> Result<()> {
  let edit = Edit::Move {
    from: from.to_string(),
    to: to.to_string(),
  };

  run_edit(
    state,
    &edit,
    edit_options(force, no_backup),
    &[edit.to_string()],
    &format!("Successfully moved {} to {}", from, to),
  )
}
