use std::path::Path;

use anyhow::Result;
use tfstate_lib::edit::Edit;

use crate::cmd::{edit_options, run_edit};

/// Remove a resource from the state file.
///
/// Only the state entry goes away; the real infrastructure is untouched.
pub fn cmd_delete(state: &Path, address: &str, force: bool, no_backup: bool) -> Result<()> {
  let edit = Edit::Delete {
    address: address.to_string(),
  };

  run_edit(
    state,
    &edit,
    edit_options(force, no_backup),
    &[
      format!("WARNING: This will delete {} from the state file!", address),
      "This does not destroy the actual resource in your cloud provider.".to_string(),
    ],
    &format!("Successfully deleted {} from state", address),
  )
}
