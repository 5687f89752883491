use std::path::Path;

use anyhow::Result;
use tfstate_lib::edit::{Edit, parse_value};

use crate::cmd::{edit_options, run_edit};

/// Set one attribute of a resource.
///
/// `value` is read as JSON when it parses (`42`, `true`, `null`,
/// `["a"]`, `{"k": 1}`), otherwise it is stored as a plain string.
pub fn cmd_modify(state: &Path, address: &str, attribute: &str, value: &str, force: bool, no_backup: bool) -> Result<()> {
  let edit = Edit::Modify {
    address: address.to_string(),
    path: attribute.to_string(),
    value: parse_value(value),
  };

  run_edit(
    state,
    &edit,
    edit_options(force, no_backup),
    &[edit.to_string()],
    &format!("Successfully modified {}", address),
  )
}
