use std::path::Path;

use anyhow::{Context, Result, bail};
use tfstate_lib::config::EditOptions;
use tfstate_lib::edit::ExportOutcome;

use crate::cmd::open_state;
use crate::output::print_success;
use crate::prompts;

pub fn cmd_export(state: &Path, address: &str, output: &Path, force: bool) -> Result<()> {
  let editor = open_state(state)?;
  let options = EditOptions::default().with_force(force);

  let outcome = editor
    .export_to(address, output, &options, &mut prompts::confirm)
    .with_context(|| format!("Failed to export {}", address))?;

  match outcome {
    ExportOutcome::Exported(dest) => {
      print_success(&format!("Resource {} exported to {}", address, dest.display()));
      Ok(())
    }
    ExportOutcome::NotFound(address) => bail!("Resource {} not found", address),
    ExportOutcome::Cancelled => bail!("Export cancelled"),
  }
}
