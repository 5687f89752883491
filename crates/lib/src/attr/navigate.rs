//! Path traversal over `serde_json::Value` trees.
//!
//! Key segments descend into maps and create missing intermediate maps on
//! the way (auto-vivification). Index segments descend into sequences and
//! are never created. A segment applied to the wrong kind of container is a
//! [`PathError::ShapeMismatch`].

use serde_json::{Map, Value};
use tracing::trace;

use super::types::{AttrPath, PathError, Segment, ValueKind};

fn shape_mismatch(path: &AttrPath, depth: usize, expected: ValueKind, actual: &Value) -> PathError {
  PathError::ShapeMismatch {
    path: path.prefix(depth),
    expected,
    actual: ValueKind::of(actual),
  }
}

fn out_of_range(path: &AttrPath, depth: usize, index: usize, len: usize) -> PathError {
  PathError::IndexOutOfRange {
    path: path.prefix(depth),
    index,
    len,
  }
}

/// Descend one level, creating an empty map for a missing key.
fn step_mut<'a>(
  current: &'a mut Value,
  segment: &Segment,
  path: &AttrPath,
  depth: usize,
) -> Result<&'a mut Value, PathError> {
  match segment {
    Segment::Key(key) => match current {
      Value::Object(map) => Ok(
        map
          .entry(key.clone())
          .or_insert_with(|| Value::Object(Map::new())),
      ),
      other => Err(shape_mismatch(path, depth, ValueKind::Map, other)),
    },
    Segment::Index(index) => match current {
      Value::Array(items) => {
        let len = items.len();
        items
          .get_mut(*index)
          .ok_or_else(|| out_of_range(path, depth, *index, len))
      }
      other => Err(shape_mismatch(path, depth, ValueKind::Sequence, other)),
    },
  }
}

/// Descend one level without modifying anything. A missing key yields `None`.
fn step<'a>(current: &'a Value, segment: &Segment, path: &AttrPath, depth: usize) -> Result<Option<&'a Value>, PathError> {
  match segment {
    Segment::Key(key) => match current {
      Value::Object(map) => Ok(map.get(key)),
      other => Err(shape_mismatch(path, depth, ValueKind::Map, other)),
    },
    Segment::Index(index) => match current {
      Value::Array(items) => items
        .get(*index)
        .map(Some)
        .ok_or_else(|| out_of_range(path, depth, *index, items.len())),
      other => Err(shape_mismatch(path, depth, ValueKind::Sequence, other)),
    },
  }
}

/// Walk every segment but the last, returning the parent container and the
/// unconsumed final segment.
///
/// Missing keys along the way are filled with empty maps, so a failure part
/// way through can leave those maps behind. Use [`set_path`] when the tree
/// must stay untouched on error.
pub fn resolve_parent<'a, 'p>(root: &'a mut Value, path: &'p AttrPath) -> Result<(&'a mut Value, &'p Segment), PathError> {
  let mut current = root;
  for (depth, segment) in path.parents().iter().enumerate() {
    current = step_mut(current, segment, path, depth)?;
  }
  Ok((current, path.last()))
}

/// Write `value` into `parent` at `last`.
///
/// An index segment overwrites an existing slot of a sequence; a key segment
/// inserts or overwrites a map entry.
pub fn write_at(parent: &mut Value, last: &Segment, value: Value, path: &AttrPath) -> Result<(), PathError> {
  let depth = path.len() - 1;
  match last {
    Segment::Key(key) => match parent {
      Value::Object(map) => {
        map.insert(key.clone(), value);
        Ok(())
      }
      other => Err(shape_mismatch(path, depth, ValueKind::Map, other)),
    },
    Segment::Index(index) => match parent {
      Value::Array(items) => {
        let len = items.len();
        let slot = items
          .get_mut(*index)
          .ok_or_else(|| out_of_range(path, depth, *index, len))?;
        *slot = value;
        Ok(())
      }
      other => Err(shape_mismatch(path, depth, ValueKind::Sequence, other)),
    },
  }
}

/// Read the value at `path`, applying the same segment rules as writes but
/// never creating anything. Returns `Ok(None)` when a key is absent.
pub fn read_at<'a>(root: &'a Value, path: &AttrPath) -> Result<Option<&'a Value>, PathError> {
  let mut current = root;
  for (depth, segment) in path.segments().iter().enumerate() {
    match step(current, segment, path, depth)? {
      Some(next) => current = next,
      None => return Ok(None),
    }
  }
  Ok(Some(current))
}

/// Check that writing at `path` would succeed, without touching the tree.
///
/// Once a key is missing, everything below it will be a freshly created map,
/// so any later index segment is a shape mismatch against an empty map.
pub fn check_writable(root: &Value, path: &AttrPath) -> Result<(), PathError> {
  let mut current = root;
  for (depth, segment) in path.segments().iter().enumerate() {
    let is_last = depth + 1 == path.len();
    if is_last {
      // Final key writes only need a map; final index writes need the slot.
      return match segment {
        Segment::Key(_) if current.is_object() => Ok(()),
        Segment::Key(_) => Err(shape_mismatch(path, depth, ValueKind::Map, current)),
        Segment::Index(_) => step(current, segment, path, depth).map(|_| ()),
      };
    }
    match step(current, segment, path, depth)? {
      Some(next) => current = next,
      None => {
        let vivified = Value::Object(Map::new());
        return match path.segments()[depth + 1..].iter().position(Segment::is_index) {
          Some(offset) => Err(shape_mismatch(path, depth + 1 + offset, ValueKind::Sequence, &vivified)),
          None => Ok(()),
        };
      }
    }
  }
  Ok(())
}

/// Resolve `path` under `root` and write `value` there.
///
/// Either the whole write happens or the tree is left exactly as it was:
/// the path is checked first, and the write is the last step.
pub fn set_path(root: &mut Value, path: &AttrPath, value: Value) -> Result<(), PathError> {
  check_writable(root, path)?;
  let (parent, last) = resolve_parent(root, path)?;
  trace!(path = %path, "writing attribute");
  write_at(parent, last, value, path)
}
