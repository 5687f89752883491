//! Resource addresses (`type.name`).

use std::fmt;
use std::str::FromStr;

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
  #[error("invalid resource address format: '{0}' (expected <type>.<name>)")]
  Invalid(String),
}

/// A resource address.
///
/// Parsing splits on the first `.`, so `aws_instance.web.extra` has type
/// `aws_instance` and name `web.extra`. Nothing is escaped.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address {
  pub resource_type: String,
  pub name: String,
}

impl Address {
  pub fn new(resource_type: impl Into<String>, name: impl Into<String>) -> Self {
    Self {
      resource_type: resource_type.into(),
      name: name.into(),
    }
  }

  pub fn parse(input: &str) -> Result<Self, AddressError> {
    match input.split_once('.') {
      Some((resource_type, name)) => Ok(Self::new(resource_type, name)),
      None => Err(AddressError::Invalid(input.to_string())),
    }
  }

  /// True if `resource` is a map whose `type` and `name` fields equal this address.
  pub fn matches(&self, resource: &Value) -> bool {
    resource.get("type").and_then(Value::as_str) == Some(self.resource_type.as_str())
      && resource.get("name").and_then(Value::as_str) == Some(self.name.as_str())
  }
}

impl FromStr for Address {
  type Err = AddressError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Address::parse(s)
  }
}

impl fmt::Display for Address {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}.{}", self.resource_type, self.name)
  }
}
