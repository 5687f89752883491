//! End-to-end edit scenarios on the sample state.

use std::io;

use serde_json::json;
use tfstate_lib::config::EditOptions;
use tfstate_lib::edit::{Edit, EditOutcome, StateEditor, parse_value};

use super::common::sample_editor;

fn accept(_: &str) -> io::Result<bool> {
  Ok(true)
}

#[test]
fn web_server_environment_tag_update() {
  let (_temp, mut editor) = sample_editor();
  assert!(
    editor
      .modify(
        "aws_instance.web_server",
        "instances.0.attributes.tags.Environment",
        parse_value("production"),
      )
      .unwrap()
  );
  editor.save().unwrap();

  let reopened = StateEditor::open(editor.file().path()).unwrap();
  let tags = reopened
    .get_attribute("aws_instance.web_server", "instances.0.attributes.tags")
    .unwrap()
    .unwrap();
  assert_eq!(tags, &json!({ "Name": "WebServer", "Environment": "production" }));

  let other = reopened
    .get_attribute("aws_instance.database_server", "instances.0.attributes.tags.Environment")
    .unwrap();
  assert_eq!(other, Some(&json!("development")));
}

#[test]
fn guarded_rename_of_database_server() {
  let (temp, mut editor) = sample_editor();
  let edit = Edit::Move {
    from: "aws_instance.database_server".to_string(),
    to: "aws_instance.db_server".to_string(),
  };

  let report = editor
    .apply(&edit, &EditOptions::default(), &mut accept)
    .unwrap();
  assert_eq!(report.outcome, EditOutcome::Applied);
  let backup = report.backup.unwrap();
  assert_eq!(backup.parent(), Some(temp.path()));

  let reopened = StateEditor::open(editor.file().path()).unwrap();
  assert!(reopened.get("aws_instance.db_server").unwrap().is_some());
  assert!(reopened.get("aws_instance.database_server").unwrap().is_none());

  let original = StateEditor::open(&backup).unwrap();
  assert!(original.get("aws_instance.database_server").unwrap().is_some());
}

#[test]
fn guarded_delete_without_backup() {
  let (temp, mut editor) = sample_editor();
  let edit = Edit::Delete {
    address: "aws_s3_bucket.app_bucket".to_string(),
  };
  let options = EditOptions::default().with_force(true).with_no_backup(true);

  let report = editor.apply(&edit, &options, &mut accept).unwrap();
  assert!(report.is_applied());
  assert_eq!(report.backup, None);

  let entries = std::fs::read_dir(temp.path()).unwrap().count();
  assert_eq!(entries, 1);
  assert_eq!(
    StateEditor::open(editor.file().path())
      .unwrap()
      .document()
      .resources()
      .len(),
    2
  );
}

#[test]
fn parse_value_conversions() {
  assert_eq!(parse_value("42"), json!(42));
  assert_eq!(parse_value("true"), json!(true));
  assert_eq!(parse_value("null"), json!(null));
  assert_eq!(parse_value("[\"a\", 1]"), json!(["a", 1]));
  assert_eq!(parse_value("production"), json!("production"));
  assert_eq!(parse_value(""), json!(""));
}
