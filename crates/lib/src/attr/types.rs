//! Attribute path types.
//!
//! An [`AttrPath`] is a dotted string such as `instances.0.attributes.tags.Env`
//! split into typed [`Segment`]s. Classification is purely lexical: a segment
//! made only of ASCII digits is an [`Segment::Index`], everything else is a
//! [`Segment::Key`]. The container actually found at that position is only
//! consulted during traversal, where a mismatch is an error rather than a
//! fallback to the other interpretation.

use std::fmt;
use std::str::FromStr;

use serde_json::Value;
use thiserror::Error;

/// Separator between path segments.
pub const PATH_SEPARATOR: char = '.';

/// A single segment of an attribute path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
  /// Object key, e.g. `tags`
  Key(String),
  /// Sequence index, e.g. `0`
  Index(usize),
}

impl Segment {
  /// Classify a raw segment by its lexical form.
  ///
  /// Digit strings too large for `usize` still classify as an index; they
  /// saturate to `usize::MAX` and can never be in range.
  pub fn parse(raw: &str) -> Self {
    if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) {
      Segment::Index(raw.parse().unwrap_or(usize::MAX))
    } else {
      Segment::Key(raw.to_string())
    }
  }

  pub fn is_index(&self) -> bool {
    matches!(self, Segment::Index(_))
  }
}

impl fmt::Display for Segment {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Segment::Key(key) => f.write_str(key),
      Segment::Index(index) => write!(f, "{}", index),
    }
  }
}

/// A parsed dotted attribute path. Always holds at least one segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AttrPath {
  segments: Vec<Segment>,
}

impl AttrPath {
  /// Parse a dotted path.
  ///
  /// Splits on every `.`; empty segments (as in `a..b`) are kept as empty
  /// keys. Only a completely empty input is rejected.
  pub fn parse(input: &str) -> Result<Self, PathError> {
    if input.is_empty() {
      return Err(PathError::Empty);
    }
    let segments = input.split(PATH_SEPARATOR).map(Segment::parse).collect();
    Ok(Self { segments })
  }

  pub fn segments(&self) -> &[Segment] {
    &self.segments
  }

  /// All segments except the last one.
  pub fn parents(&self) -> &[Segment] {
    &self.segments[..self.segments.len() - 1]
  }

  /// The segment naming the location that gets read or written.
  pub fn last(&self) -> &Segment {
    &self.segments[self.segments.len() - 1]
  }

  pub fn len(&self) -> usize {
    self.segments.len()
  }

  pub fn is_empty(&self) -> bool {
    self.segments.is_empty()
  }

  /// Dotted form of the first `depth + 1` segments, used in error messages.
  pub fn prefix(&self, depth: usize) -> String {
    let end = (depth + 1).min(self.segments.len());
    self.segments[..end]
      .iter()
      .map(Segment::to_string)
      .collect::<Vec<_>>()
      .join(".")
  }
}

impl FromStr for AttrPath {
  type Err = PathError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    AttrPath::parse(s)
  }
}

impl fmt::Display for AttrPath {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.prefix(self.segments.len()))
  }
}

/// Runtime shape of a JSON value, as far as traversal cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
  Map,
  Sequence,
  String,
  Number,
  Bool,
  Null,
}

impl ValueKind {
  pub fn of(value: &Value) -> Self {
    match value {
      Value::Object(_) => ValueKind::Map,
      Value::Array(_) => ValueKind::Sequence,
      Value::String(_) => ValueKind::String,
      Value::Number(_) => ValueKind::Number,
      Value::Bool(_) => ValueKind::Bool,
      Value::Null => ValueKind::Null,
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      ValueKind::Map => "map",
      ValueKind::Sequence => "sequence",
      ValueKind::String => "string",
      ValueKind::Number => "number",
      ValueKind::Bool => "bool",
      ValueKind::Null => "null",
    }
  }
}

impl fmt::Display for ValueKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Failure to resolve an attribute path against a value tree.
///
/// `path` is the dotted prefix up to and including the offending segment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
  #[error("attribute path is empty")]
  Empty,

  #[error("cannot resolve '{path}': expected a {expected}, found a {actual}")]
  ShapeMismatch {
    path: String,
    expected: ValueKind,
    actual: ValueKind,
  },

  #[error("cannot resolve '{path}': index {index} out of range for sequence of length {len}")]
  IndexOutOfRange { path: String, index: usize, len: usize },
}
