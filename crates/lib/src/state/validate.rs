//! Structural validation of state documents.
//!
//! Validation never fails: every problem found is collected into a
//! [`ValidationReport`]. Duplicate addresses are not reported.

use serde::Serialize;
use serde_json::Value;

use crate::consts::{RESOURCES_KEY, VERSION_KEY};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
  pub errors: Vec<String>,
}

impl ValidationReport {
  pub fn is_valid(&self) -> bool {
    self.errors.is_empty()
  }

  fn push(&mut self, message: impl Into<String>) {
    self.errors.push(message.into());
  }
}

/// Validate any parsed JSON value as a state document.
pub fn validate_value(root: &Value) -> ValidationReport {
  let mut report = ValidationReport::default();

  let Some(fields) = root.as_object() else {
    report.push("state data must be a map");
    return report;
  };

  if !fields.contains_key(RESOURCES_KEY) {
    report.push(format!("missing '{}' key", RESOURCES_KEY));
  }
  if !fields.contains_key(VERSION_KEY) {
    report.push(format!("missing '{}' key", VERSION_KEY));
  }

  match fields.get(RESOURCES_KEY) {
    None => {}
    Some(Value::Array(resources)) => check_resources(resources, &mut report),
    Some(_) => report.push(format!("'{}' must be a sequence", RESOURCES_KEY)),
  }

  report
}

/// Every entry must be a map carrying both `type` and `name`.
pub(crate) fn check_resources(resources: &[Value], report: &mut ValidationReport) {
  for (i, resource) in resources.iter().enumerate() {
    let Some(resource) = resource.as_object() else {
      report.push(format!("resource {} must be a map", i));
      continue;
    };
    if !resource.contains_key("type") {
      report.push(format!("resource {} missing 'type'", i));
    }
    if !resource.contains_key("name") {
      report.push(format!("resource {} missing 'name'", i));
    }
  }
}
