//! Read-only command integration tests: list, show, export, validate, find.

use predicates::prelude::*;
use serde_json::Value;

use super::common::TestEnv;

#[test]
fn list_tree_groups_by_type() {
  let env = TestEnv::from_fixture("sample.tfstate");

  env
    .tfstate_cmd()
    .arg("list")
    .arg(&env.state_path)
    .assert()
    .success()
    .stdout(predicate::str::contains("aws_instance (2 resources)"))
    .stdout(predicate::str::contains("aws_s3_bucket (1 resource)"))
    .stdout(predicate::str::contains("web_server (1 instance)"))
    .stdout(predicate::str::contains("Total: 3 resources"));
}

#[test]
fn list_table_filters_by_type() {
  let env = TestEnv::from_fixture("sample.tfstate");

  env
    .tfstate_cmd()
    .args(["list", "--format", "table", "--type", "aws_instance"])
    .arg(&env.state_path)
    .assert()
    .success()
    .stdout(predicate::str::contains("ADDRESS"))
    .stdout(predicate::str::contains("aws_instance.database_server"))
    .stdout(predicate::str::contains("aws_s3_bucket").not())
    .stdout(predicate::str::contains("Total: 2 resources"));
}

#[test]
fn list_json_applies_name_glob() {
  let env = TestEnv::from_fixture("sample.tfstate");

  let output = env
    .tfstate_cmd()
    .args(["list", "--format", "json", "--name", "*web*"])
    .arg(&env.state_path)
    .output()
    .unwrap();
  assert!(output.status.success());

  let rows: Value = serde_json::from_slice(&output.stdout).unwrap();
  let rows = rows.as_array().unwrap();
  assert_eq!(rows.len(), 1);
  assert_eq!(rows[0]["address"], "aws_instance.web_server");
  assert_eq!(rows[0]["type"], "aws_instance");
  assert_eq!(rows[0]["mode"], "managed");
  assert_eq!(rows[0]["instances"], 1);
}

#[test]
fn list_with_no_matches_warns() {
  let env = TestEnv::from_fixture("sample.tfstate");

  env
    .tfstate_cmd()
    .args(["list", "--type", "google_compute_instance"])
    .arg(&env.state_path)
    .assert()
    .success()
    .stderr(predicate::str::contains("No resources found matching criteria"));
}

#[test]
fn list_rejects_corrupted_file() {
  let env = TestEnv::empty();
  env.write_file("terraform.tfstate", "garbage data");

  env
    .tfstate_cmd()
    .arg("list")
    .arg(&env.state_path)
    .assert()
    .failure()
    .stderr(predicate::str::contains("Failed to load state file"));
}

#[test]
fn show_prints_attribute() {
  let env = TestEnv::from_fixture("sample.tfstate");

  env
    .tfstate_cmd()
    .args(["show", "--path", "instances.0.attributes.tags"])
    .arg(&env.state_path)
    .arg("aws_instance.web_server")
    .assert()
    .success()
    .stdout(predicate::str::contains("\"Name\": \"WebServer\""));
}

#[test]
fn show_missing_resource_fails() {
  let env = TestEnv::from_fixture("sample.tfstate");

  env
    .tfstate_cmd()
    .arg("show")
    .arg(&env.state_path)
    .arg("aws_instance.ghost")
    .assert()
    .failure()
    .stderr(predicate::str::contains("Resource aws_instance.ghost not found"));
}

#[test]
fn show_invalid_address_fails() {
  let env = TestEnv::from_fixture("sample.tfstate");

  env
    .tfstate_cmd()
    .arg("show")
    .arg(&env.state_path)
    .arg("aws_instance")
    .assert()
    .failure()
    .stderr(predicate::str::contains("invalid resource address format"));
}

#[test]
fn export_writes_resource_file() {
  let env = TestEnv::from_fixture("sample.tfstate");
  let output = env.temp.path().join("bucket.json");

  env
    .tfstate_cmd()
    .arg("export")
    .arg(&env.state_path)
    .arg("aws_s3_bucket.app_bucket")
    .arg(&output)
    .assert()
    .success()
    .stdout(predicate::str::contains("exported to"));

  let exported: Value = serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
  assert_eq!(exported["name"], "app_bucket");
  assert_eq!(exported["instances"][0]["attributes"]["bucket"], "my-app-bucket-12345");
}

#[test]
fn export_over_existing_file_needs_force() {
  let env = TestEnv::from_fixture("sample.tfstate");
  env.write_file("out.json", "keep");
  let output = env.temp.path().join("out.json");

  env
    .tfstate_cmd()
    .arg("export")
    .arg(&env.state_path)
    .arg("aws_s3_bucket.app_bucket")
    .arg(&output)
    .assert()
    .failure()
    .stderr(predicate::str::contains("non-interactive"));
  assert_eq!(std::fs::read_to_string(&output).unwrap(), "keep");

  env
    .tfstate_cmd()
    .arg("export")
    .arg(&env.state_path)
    .arg("aws_s3_bucket.app_bucket")
    .arg(&output)
    .arg("--force")
    .assert()
    .success();
  assert_ne!(std::fs::read_to_string(&output).unwrap(), "keep");
}

#[test]
fn validate_accepts_sample() {
  let env = TestEnv::from_fixture("sample.tfstate");

  env
    .tfstate_cmd()
    .arg("validate")
    .arg(&env.state_path)
    .assert()
    .success()
    .stdout(predicate::str::contains("State file is valid"));
}

#[test]
fn validate_reports_every_error() {
  let env = TestEnv::empty();
  env.write_file(
    "terraform.tfstate",
    r#"{"resources": [{"type": "aws_instance"}, "oops"]}"#,
  );

  env
    .tfstate_cmd()
    .arg("validate")
    .arg(&env.state_path)
    .assert()
    .failure()
    .stderr(predicate::str::contains("missing 'version' key"))
    .stderr(predicate::str::contains("resource 0 missing 'name'"))
    .stderr(predicate::str::contains("resource 1 must be a map"));
}

#[test]
fn validate_json_output() {
  let env = TestEnv::empty();
  env.write_file("terraform.tfstate", r#"{"version": 4, "resources": {}}"#);

  let output = env
    .tfstate_cmd()
    .args(["validate", "--format", "json"])
    .arg(&env.state_path)
    .output()
    .unwrap();
  assert!(!output.status.success());

  let report: Value = serde_json::from_slice(&output.stdout).unwrap();
  assert_eq!(report["valid"], false);
  assert_eq!(report["errors"][0], "'resources' must be a sequence");
}

#[test]
fn find_lists_state_files_with_sizes() {
  let env = TestEnv::from_fixture("sample.tfstate");
  env.write_file("envs/prod/terraform.tfstate", "{}");
  env.write_file("notes.txt", "");

  env
    .tfstate_cmd()
    .arg("find")
    .arg(env.temp.path())
    .assert()
    .success()
    .stdout(predicate::str::contains("Found 2 state file(s)"))
    .stdout(predicate::str::contains("(2 B)"))
    .stdout(predicate::str::contains("notes.txt").not());
}

#[test]
fn find_defaults_to_current_directory() {
  let env = TestEnv::from_fixture("sample.tfstate");

  env
    .tfstate_cmd()
    .arg("find")
    .assert()
    .success()
    .stdout(predicate::str::contains("terraform.tfstate"));
}

#[test]
fn find_in_empty_directory_fails() {
  let env = TestEnv::empty();

  env
    .tfstate_cmd()
    .arg("find")
    .arg(env.temp.path())
    .assert()
    .failure()
    .stderr(predicate::str::contains("No .tfstate files found"));
}
