//! Implementation of the `tfstate validate` command.
//!
//! Validation works on the raw JSON so that a file which cannot be loaded as
//! a state document still gets a full list of problems.

use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Serialize;
use tfstate_lib::state::{StateFile, validate_value};

use crate::cmd::ensure_readable;
use crate::output::{OutputFormat, print_json, print_success, print_warning};

#[derive(Debug, Serialize)]
struct ValidateOutput<'a> {
  valid: bool,
  errors: &'a [String],
}

pub fn cmd_validate(state: &Path, output: OutputFormat) -> Result<()> {
  ensure_readable(state)?;
  let value = StateFile::new(state)
    .read_value()
    .with_context(|| format!("Failed to read state file {}", state.display()))?;
  let report = validate_value(&value);

  if output.is_json() {
    print_json(&ValidateOutput {
      valid: report.is_valid(),
      errors: &report.errors,
    })?;
  } else if report.is_valid() {
    print_success("State file is valid");
  } else {
    print_warning("State file has validation errors:");
    for error in &report.errors {
      eprintln!("  • {}", error);
    }
  }

  if !report.is_valid() {
    bail!("{} validation error(s) found", report.errors.len());
  }
  Ok(())
}
