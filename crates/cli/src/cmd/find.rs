use std::path::Path;

use anyhow::{Result, bail};
use tfstate_lib::discover::find_state_files;
use tfstate_lib::state::StateFile;

use crate::output::{format_bytes, print_success};

/// List `*.tfstate` files below `dir` with their sizes.
pub fn cmd_find(dir: &Path) -> Result<()> {
  let files = find_state_files(dir);
  if files.is_empty() {
    bail!("No .tfstate files found in {}", dir.display());
  }

  print_success(&format!("Found {} state file(s):", files.len()));
  for path in &files {
    match StateFile::new(path).size() {
      Ok(size) => println!("  {} ({})", path.display(), format_bytes(size)),
      Err(_) => println!("  {}", path.display()),
    }
  }
  Ok(())
}
