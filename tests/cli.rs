mod common;

use common::{fixture_document, TestEnv};
use predicates::str::contains;
use serde_json::json;

#[test]
fn tags_reports_tag_keys() {
    let env = TestEnv::new();
    env.write_doc_utf8(&fixture_document());
    env.cmd()
        .args(["--file", env.doc_arg(), "tags"])
        .assert()
        .success()
        .stdout(contains("tag keys for model 0"))
        .stdout(contains("instruments"))
        .stdout(contains("genre"));
}

#[test]
fn tags_json_lists_keys() {
    let env = TestEnv::new();
    env.write_doc_utf8(&fixture_document());
    let out = env.run_json(&["tags", "--model", "1"]);
    assert_eq!(out["ok"], json!(true));
    assert_eq!(out["data"]["keys"], json!(["instruments"]));
}

#[test]
fn tags_unknown_model_fails() {
    let env = TestEnv::new();
    env.write_doc_utf8(&fixture_document());
    env.cmd()
        .args(["--file", env.doc_arg(), "tags", "--model", "99"])
        .assert()
        .failure()
        .stderr(contains("model not found"));
}

#[test]
fn rules_survey_reports_names_and_example() {
    let env = TestEnv::new();
    env.write_doc_utf8(&fixture_document());
    env.cmd()
        .args(["--file", env.doc_arg(), "rules"])
        .assert()
        .success()
        .stdout(contains("found rules: gen_measure_count"))
        .stdout(contains("example rule object from model 0"));
}

#[test]
fn rules_survey_json_deduplicates() {
    let env = TestEnv::new();
    env.write_doc_utf8(&json!({
        "a": {"rule": {"x": true, "y": false}},
        "b": {"rule": {"x": false}},
        "c": {}
    }));
    let out = env.run_json(&["rules"]);
    assert_eq!(out["data"]["rules"], json!(["x", "y"]));
    assert_eq!(out["data"]["example_model"], json!("a"));
}

#[test]
fn verify_reports_raw_value_and_type() {
    let env = TestEnv::new();
    env.write_doc_utf8(&json!({"0": {"tag": {"instruments": ["a"]}}}));
    env.cmd()
        .args(["--file", env.doc_arg(), "verify"])
        .assert()
        .success()
        .stdout(contains("Instruments raw value:"))
        .stdout(contains("Instruments type: <list>"));
}

#[test]
fn verify_missing_field_reports_missing() {
    let env = TestEnv::new();
    env.write_doc_utf8(&fixture_document());
    let out = env.run_json(&["verify", "--field", "bpm"]);
    assert_eq!(out["data"]["kind"], json!("missing"));
    assert_eq!(out["data"]["value"], json!(null));
}

#[test]
fn wrong_encoding_reports_decode_error() {
    let env = TestEnv::new();
    env.write_doc_utf16(&fixture_document());
    env.cmd()
        .args(["--file", env.doc_arg(), "tags"])
        .assert()
        .failure()
        .stderr(contains("cannot decode"));
}

#[test]
fn malformed_rule_assignment_is_rejected() {
    let env = TestEnv::new();
    env.write_doc_utf8(&fixture_document());
    env.cmd()
        .args(["--file", env.doc_arg(), "apply", "x=yes"])
        .assert()
        .failure()
        .stderr(contains("true or false"));
}

#[test]
fn fetch_unreachable_endpoint_fails() {
    let env = TestEnv::new();
    env.cmd()
        .args([
            "--file",
            env.doc_arg(),
            "fetch",
            "--url",
            "http://127.0.0.1:9/model_info",
        ])
        .assert()
        .failure();
    assert!(!env.doc.exists(), "no output file on fetch failure");
}
