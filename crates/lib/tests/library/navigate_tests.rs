//! Attribute path resolution through the public API.

use serde_json::json;
use tfstate_lib::attr::{AttrPath, PathError, read_at, set_path};

#[test]
fn missing_keys_are_created() {
  let mut root = json!({});
  set_path(&mut root, &AttrPath::parse("a.b.c").unwrap(), json!(5)).unwrap();
  assert_eq!(root, json!({ "a": { "b": { "c": 5 } } }));
}

#[test]
fn indices_never_extend_sequences() {
  let mut root = json!({ "items": ["x"] });
  let err = set_path(&mut root, &AttrPath::parse("items.1").unwrap(), json!("y")).unwrap_err();
  assert!(matches!(err, PathError::IndexOutOfRange { index: 1, len: 1, .. }));
  assert_eq!(root, json!({ "items": ["x"] }));
}

#[test]
fn index_into_map_is_shape_mismatch() {
  let mut root = json!({ "tags": { "Name": "web" } });
  let err = set_path(&mut root, &AttrPath::parse("tags.0").unwrap(), json!("x")).unwrap_err();
  assert!(matches!(err, PathError::ShapeMismatch { .. }));
}

#[test]
fn key_through_scalar_is_shape_mismatch() {
  let mut root = json!({ "ami": "ami-1" });
  let err = set_path(&mut root, &AttrPath::parse("ami.id").unwrap(), json!("x")).unwrap_err();
  assert!(matches!(err, PathError::ShapeMismatch { .. }));
  assert_eq!(root, json!({ "ami": "ami-1" }));
}

#[test]
fn replacing_existing_element() {
  let mut root = json!({ "ids": ["sg-1", "sg-2"] });
  set_path(&mut root, &AttrPath::parse("ids.1").unwrap(), json!("sg-9")).unwrap();
  assert_eq!(root, json!({ "ids": ["sg-1", "sg-9"] }));
}

#[test]
fn reading_does_not_create() {
  let root = json!({ "a": {} });
  assert_eq!(read_at(&root, &AttrPath::parse("a.b.c").unwrap()).unwrap(), None);
  assert_eq!(root, json!({ "a": {} }));
}
