use std::path::Path;

use anyhow::Result;
use tfstate_lib::state::ResourceFilter;

use crate::cmd::open_state;
use crate::output::{ListFormat, print_json, print_success, print_warning};
use crate::render;

/// Execute the list command.
///
/// Empty `--type`/`--name` values are treated as absent.
pub fn cmd_list(state: &Path, resource_type: Option<&str>, name: Option<&str>, format: ListFormat) -> Result<()> {
  let editor = open_state(state)?;
  let resources = editor.list(&ResourceFilter::new(resource_type, name));

  match format {
    ListFormat::Json => return print_json(&resources),
    _ if resources.is_empty() => {
      print_warning("No resources found matching criteria");
      return Ok(());
    }
    ListFormat::Tree => print!("{}", render::tree(&resources)),
    ListFormat::Table => print!("{}", render::table(&resources)),
  }

  println!();
  print_success(&render::total(resources.len()));
  Ok(())
}
