//! Address-based operations over the `resources` sequence.
//!
//! Resources are kept as raw JSON values so that anything a provider writes
//! survives a load/save cycle untouched. Lookups go by `(type, name)`.

use glob::Pattern;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::consts::DEFAULT_MODE;

use super::address::Address;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndexError {
  #[error("resource already exists at address: {0}")]
  Collision(String),
}

/// One row of `list` output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceSummary {
  pub address: String,
  #[serde(rename = "type")]
  pub resource_type: Option<String>,
  pub name: Option<String>,
  pub mode: String,
  pub instances: usize,
}

impl ResourceSummary {
  pub fn from_resource(resource: &Value) -> Self {
    let field = |key: &str| resource.get(key).and_then(Value::as_str).map(str::to_string);
    let resource_type = field("type");
    let name = field("name");
    Self {
      address: format!(
        "{}.{}",
        resource_type.as_deref().unwrap_or("unknown"),
        name.as_deref().unwrap_or("unknown")
      ),
      mode: field("mode").unwrap_or_else(|| DEFAULT_MODE.to_string()),
      instances: resource
        .get("instances")
        .and_then(Value::as_array)
        .map_or(0, Vec::len),
      resource_type,
      name,
    }
  }
}

#[derive(Debug, Clone)]
enum NameMatcher {
  Glob(Pattern),
  Literal(String),
}

impl NameMatcher {
  fn matches(&self, address: &str) -> bool {
    match self {
      NameMatcher::Glob(pattern) => pattern.matches(address),
      NameMatcher::Literal(literal) => literal == address,
    }
  }
}

/// Optional restrictions applied by [`list`].
#[derive(Debug, Clone, Default)]
pub struct ResourceFilter {
  resource_type: Option<String>,
  name_pattern: Option<NameMatcher>,
}

impl ResourceFilter {
  /// Build a filter. Empty strings mean "no restriction".
  ///
  /// The name pattern is a shell-style glob (`*`, `?`, `[...]`) matched
  /// against the full address. A pattern that is not a valid glob is
  /// matched literally.
  pub fn new(resource_type: Option<&str>, name_pattern: Option<&str>) -> Self {
    let name_pattern = name_pattern
      .filter(|p| !p.is_empty())
      .map(|p| match Pattern::new(&collapse_stars(p)) {
        Ok(pattern) => NameMatcher::Glob(pattern),
        Err(_) => NameMatcher::Literal(p.to_string()),
      });
    Self {
      resource_type: resource_type.filter(|t| !t.is_empty()).map(str::to_string),
      name_pattern,
    }
  }

  pub fn accepts(&self, summary: &ResourceSummary) -> bool {
    let type_ok = match &self.resource_type {
      Some(wanted) => summary.resource_type.as_deref() == Some(wanted.as_str()),
      None => true,
    };
    let name_ok = match &self.name_pattern {
      Some(matcher) => matcher.matches(&summary.address),
      None => true,
    };
    type_ok && name_ok
  }
}

/// Fold runs of `*` into one; `glob` only accepts `**` as a whole path
/// component, and addresses have no components.
fn collapse_stars(pattern: &str) -> String {
  let mut out = String::with_capacity(pattern.len());
  for c in pattern.chars() {
    if c == '*' && out.ends_with('*') {
      continue;
    }
    out.push(c);
  }
  out
}

/// Summarise resources in document order, keeping those the filter accepts.
pub fn list(resources: &[Value], filter: &ResourceFilter) -> Vec<ResourceSummary> {
  resources
    .iter()
    .map(ResourceSummary::from_resource)
    .filter(|summary| filter.accepts(summary))
    .collect()
}

/// First resource at `address`, in document order.
pub fn find<'a>(resources: &'a [Value], address: &Address) -> Option<&'a Value> {
  resources.iter().find(|r| address.matches(r))
}

pub fn find_mut<'a>(resources: &'a mut [Value], address: &Address) -> Option<&'a mut Value> {
  resources.iter_mut().find(|r| address.matches(r))
}

/// Remove every resource at `address`. Returns whether anything was removed.
pub fn remove(resources: &mut Vec<Value>, address: &Address) -> bool {
  let before = resources.len();
  resources.retain(|r| !address.matches(r));
  resources.len() < before
}

/// Rename the resource at `old` to `new` in place.
///
/// Returns `Ok(false)` when nothing lives at `old`, and
/// [`IndexError::Collision`] when `new` is already taken. The resource keeps
/// its position and every other field.
pub fn rename(resources: &mut [Value], old: &Address, new: &Address) -> Result<bool, IndexError> {
  if find(resources, old).is_none() {
    return Ok(false);
  }
  if find(resources, new).is_some() {
    return Err(IndexError::Collision(new.to_string()));
  }
  let Some(Value::Object(fields)) = find_mut(resources, old) else {
    return Ok(false);
  };
  fields.insert("type".to_string(), Value::String(new.resource_type.clone()));
  fields.insert("name".to_string(), Value::String(new.name.clone()));
  Ok(true)
}
