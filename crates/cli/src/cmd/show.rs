use std::path::Path;

use anyhow::{Result, bail};

use crate::cmd::open_state;
use crate::output::print_json;

/// Print a resource, or one of its attributes, as pretty JSON.
pub fn cmd_show(state: &Path, address: &str, path: Option<&str>) -> Result<()> {
  let editor = open_state(state)?;

  let Some(resource) = editor.get(address)? else {
    bail!("Resource {} not found", address);
  };

  let value = match path {
    Some(path) => match editor.get_attribute(address, path)? {
      Some(value) => value,
      None => bail!("Attribute {} not found in {}", path, address),
    },
    None => resource,
  };

  print_json(value)
}
