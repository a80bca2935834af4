//! Tests for `smenv fetch` input validation.
//!
//! Every case here fails before an AWS client is created, so no credentials
//! or network are needed.

use crate::support::*;

#[test]
fn test_no_secret_ids_fails_with_hint() {
    let t = Test::new();

    let output = t.fetch(&[]);
    assert_failure(&output);
    assert_stderr_contains(&output, "no secret ids provided");
    assert_stderr_contains(&output, "--secret-ids");
}

#[test]
fn test_blank_secret_ids_fail() {
    let t = Test::new();

    let output = t.fetch(&["--secret-ids", "\n  \n"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "no secret ids provided");
}

#[test]
fn test_invalid_transformation_fails_with_hint() {
    let t = Test::new();

    let output = t.fetch(&["--secret-ids", "prod/db", "--name-transformation", "camel"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid name transformation 'camel'");
    assert_stderr_contains(&output, "none, uppercase or lowercase");
}

#[test]
fn test_invalid_boolean_fails() {
    let t = Test::new();

    let output = t.fetch(&["--secret-ids", "prod/db", "--parse-json-secrets", "yes"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "does not meet YAML 1.2 core schema");
}

#[test]
fn test_invalid_alias_fails() {
    let t = Test::new();

    let output = t.fetch(&["--secret-ids", "my-alias,prod/db"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "the alias 'my-alias' is not a valid environment name");
}

#[test]
fn test_invalid_prefix_fails() {
    let t = Test::new();

    let output = t.fetch(&["--secret-ids", "prod/*/db"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid prefix 'prod/*/db'");
}

#[test]
fn test_empty_id_fails() {
    let t = Test::new();

    let output = t.fetch(&["--secret-ids", "DB,"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "empty secret id");
}

#[test]
fn test_inputs_read_from_action_variables() {
    let t = Test::new();

    let output = t
        .cmd()
        .arg("fetch")
        .env("INPUT_SECRET-IDS", "prod/db\nprod/api")
        .env("INPUT_NAME-TRANSFORMATION", "kebab")
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid name transformation 'kebab'");
}

#[test]
fn test_action_boolean_input_validated() {
    let t = Test::new();

    let output = t
        .cmd()
        .arg("fetch")
        .env("INPUT_SECRET-IDS", "prod/db")
        .env("INPUT_PARSE-JSON-SECRETS", "1")
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "got '1'");
}

#[test]
fn test_failed_validation_writes_nothing() {
    let t = Test::new();

    let output = t
        .runner_cmd()
        .args(["fetch", "--secret-ids", "bad alias,prod/db"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert!(t.env_file_contents().is_empty());
}
