//! End-to-end tests for the mutator binary.

use assert_cmd::Command;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

fn mutator() -> Command {
    Command::cargo_bin("resource-mutator").unwrap()
}

fn hello(cluster: &str) -> Value {
    json!({
        "tasks": [{
            "existing_cluster_id": cluster,
            "notebook_task": { "notebook_path": "/Workspace/foo" },
            "task_key": "print_hello",
        }]
    })
}

fn run_ok(args: &[&str], input: &Value) -> (Value, Value) {
    let output = mutator()
        .args(args)
        .write_stdin(input.to_string())
        .output()
        .unwrap();
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(stdout.lines().count(), 1, "stdout must be a single compact line");

    (
        serde_json::from_str(&stdout).unwrap(),
        serde_json::from_str(&stderr).unwrap(),
    )
}

#[test]
fn pre_initialize_injects_abc_job() {
    let input = json!({ "resources": { "jobs": { "other_job": {} } } });
    let (out, _) = run_ok(&["--phase", "pre-initialize"], &input);

    assert_eq!(
        out["resources"]["jobs"],
        json!({ "other_job": {}, "my_job": hello("abc") })
    );
}

#[test]
fn initialize_example_from_contract() {
    let input = json!({ "variables": { "x": 1 }, "resources": { "jobs": { "other_job": {} } } });
    let (out, debug_copy) = run_ok(&["--phase", "initialize"], &input);

    assert_eq!(
        out,
        json!({
            "variables": { "x": 1 },
            "resources": {
                "jobs": {
                    "other_job": {},
                    "my_job": hello("cde"),
                    "my_job_2": hello("cde"),
                }
            }
        })
    );
    assert_eq!(debug_copy, out);
}

#[test]
fn stderr_copy_is_indented_two_spaces() {
    mutator()
        .args(["--phase", "pre-initialize"])
        .write_stdin("{}")
        .assert()
        .success()
        .stderr(predicate::str::starts_with("{\n  \"resources\": {\n    \"jobs\""));
}

#[test]
fn missing_phase_takes_initialize_branch() {
    let input = json!({ "variables": { "env": "dev" } });
    let (out, _) = run_ok(&[], &input);
    assert_eq!(out["resources"]["jobs"]["my_job_2"], hello("cde"));
}

#[test]
fn unknown_arguments_are_ignored() {
    let input = json!({});
    let (out, _) = run_ok(
        &["--target", "dev", "--phase", "pre-initialize", "--something-else"],
        &input,
    );
    assert_eq!(out["resources"]["jobs"]["my_job"], hello("abc"));
}

#[test]
fn initialize_without_variables_fails_without_output() {
    mutator()
        .args(["--phase", "initialize"])
        .write_stdin(r#"{"resources": {}}"#)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("variables"));
}

#[test]
fn initialize_with_empty_variables_fails() {
    mutator()
        .args(["--phase", "initialize"])
        .write_stdin(r#"{"variables": {}}"#)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}

#[test]
fn malformed_input_fails() {
    mutator()
        .args(["--phase", "pre-initialize"])
        .write_stdin("not json")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("parse configuration as JSON"));
}

#[test]
fn pre_initialize_is_idempotent_across_runs() {
    let input = json!({ "bundle": { "name": "demo" } });
    let (first, _) = run_ok(&["--phase", "pre-initialize"], &input);
    let (second, _) = run_ok(&["--phase", "pre-initialize"], &first);
    assert_eq!(second, first);
}

#[test]
fn file_based_contract_with_diagnostics() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.json");
    let output = dir.path().join("output.json");
    let diagnostics = dir.path().join("diagnostics.json");
    std::fs::write(&input, r#"{"variables": {"x": 1}, "workspace": {"root": "/w"}}"#).unwrap();

    mutator()
        .arg("--phase=init")
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .arg("--diagnostics")
        .arg(&diagnostics)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let out: Value = serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(out["workspace"], json!({ "root": "/w" }));
    assert_eq!(out["resources"]["jobs"]["my_job"], hello("cde"));
    assert_eq!(std::fs::read_to_string(&diagnostics).unwrap(), "");
}

#[test]
fn diagnostics_file_records_failure() {
    let dir = tempfile::tempdir().unwrap();
    let diagnostics = dir.path().join("diagnostics.json");

    mutator()
        .arg("--diagnostics")
        .arg(&diagnostics)
        .write_stdin("{}")
        .assert()
        .failure();

    let text = std::fs::read_to_string(&diagnostics).unwrap();
    let line: Value = serde_json::from_str(text.trim_end()).unwrap();
    assert_eq!(line["severity"], "error");
    assert!(line["summary"].as_str().unwrap().contains("variables"));
}

#[test]
fn numbers_pass_through_as_written() {
    mutator()
        .args(["--phase", "pre-initialize"])
        .write_stdin(r#"{"bundle":{"id":123456789012345678901234567890},"f":1e400}"#)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            r#"{"bundle":{"id":123456789012345678901234567890},"f":1e400,"resources":{"jobs":{"my_job":"#,
        ));
}

#[test]
fn repeated_phase_uses_last_value() {
    let input = json!({});
    let (out, _) = run_ok(&["--phase", "initialize", "--phase", "pre-initialize"], &input);
    assert_eq!(out["resources"]["jobs"], json!({ "my_job": hello("abc") }));
}
