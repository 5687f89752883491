//! The in-memory state document.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};

use crate::consts::{RESOURCES_KEY, VERSION_KEY};

use super::address::Address;
use super::index::{self, IndexError, ResourceFilter, ResourceSummary};
use super::types::StateError;
use super::validate::{ValidationReport, check_resources};

/// A parsed state document.
///
/// Top-level fields are kept in their original order; the `resources`
/// sequence is held separately and written back at its original position.
/// Metadata such as `serial` and `lineage` is passed through untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct StateDocument {
  fields: Map<String, Value>,
  resources: Vec<Value>,
}

impl StateDocument {
  /// Build a document from parsed JSON.
  ///
  /// The root must be a map with a `resources` sequence. Everything else,
  /// including a missing `version`, is left to [`StateDocument::validate`].
  pub fn from_value(root: Value) -> Result<Self, StateError> {
    let Value::Object(mut fields) = root else {
      return Err(StateError::Schema("state file must contain a JSON object".to_string()));
    };
    let resources = match fields.get_mut(RESOURCES_KEY) {
      None => return Err(StateError::Schema(format!("state file missing '{}' key", RESOURCES_KEY))),
      Some(Value::Array(items)) => std::mem::take(items),
      Some(_) => return Err(StateError::Schema(format!("'{}' must be a sequence", RESOURCES_KEY))),
    };
    Ok(Self { fields, resources })
  }

  pub fn parse(content: &str) -> Result<Self, StateError> {
    let root: Value = serde_json::from_str(content).map_err(StateError::Parse)?;
    Self::from_value(root)
  }

  /// Pretty JSON with two-space indentation.
  pub fn to_json_pretty(&self) -> Result<String, StateError> {
    serde_json::to_string_pretty(self).map_err(StateError::Serialize)
  }

  pub fn version(&self) -> Option<u64> {
    self.fields.get(VERSION_KEY).and_then(Value::as_u64)
  }

  pub fn terraform_version(&self) -> Option<&str> {
    self
      .fields
      .get("terraform_version")
      .or_else(|| self.fields.get("terraformVersion"))
      .and_then(Value::as_str)
  }

  pub fn serial(&self) -> Option<u64> {
    self.fields.get("serial").and_then(Value::as_u64)
  }

  pub fn lineage(&self) -> Option<&str> {
    self.fields.get("lineage").and_then(Value::as_str)
  }

  pub fn output_names(&self) -> Vec<&str> {
    match self.fields.get("outputs") {
      Some(Value::Object(outputs)) => outputs.keys().map(String::as_str).collect(),
      _ => Vec::new(),
    }
  }

  pub fn resources(&self) -> &[Value] {
    &self.resources
  }

  pub fn list(&self, filter: &ResourceFilter) -> Vec<ResourceSummary> {
    index::list(&self.resources, filter)
  }

  pub fn find(&self, address: &Address) -> Option<&Value> {
    index::find(&self.resources, address)
  }

  pub fn find_mut(&mut self, address: &Address) -> Option<&mut Value> {
    index::find_mut(&mut self.resources, address)
  }

  pub fn remove(&mut self, address: &Address) -> bool {
    index::remove(&mut self.resources, address)
  }

  pub fn rename(&mut self, old: &Address, new: &Address) -> Result<bool, IndexError> {
    index::rename(&mut self.resources, old, new)
  }

  pub fn validate(&self) -> ValidationReport {
    let mut report = ValidationReport::default();
    if !self.fields.contains_key(VERSION_KEY) {
      report.errors.push(format!("missing '{}' key", VERSION_KEY));
    }
    check_resources(&self.resources, &mut report);
    report
  }
}

impl Serialize for StateDocument {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(self.fields.len()))?;
    for (key, value) in &self.fields {
      if key == RESOURCES_KEY {
        map.serialize_entry(key, &self.resources)?;
      } else {
        map.serialize_entry(key, value)?;
      }
    }
    map.end()
  }
}
