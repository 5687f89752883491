//! Dotted attribute paths and their traversal over JSON value trees.

pub mod navigate;
pub mod types;

pub use navigate::{check_writable, read_at, resolve_parent, set_path, write_at};
pub use types::{AttrPath, PATH_SEPARATOR, PathError, Segment, ValueKind};
