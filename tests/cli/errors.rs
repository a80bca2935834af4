//! Tests for error handling and CLI flags.

use crate::support::*;

#[test]
fn test_help_lists_commands() {
    let t = Test::new();

    let output = t.cmd().arg("--help").output().unwrap();
    assert_success(&output);
    let out = stdout(&output);
    assert!(out.contains("fetch"));
    assert!(out.contains("cleanup"));
}

#[test]
fn test_no_command_fails_with_usage() {
    let t = Test::new();

    let output = t.cmd().output().unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "Usage");
}

#[test]
fn test_unknown_command_fails() {
    let t = Test::new();

    let output = t.cmd().arg("unknown-command").output().unwrap();
    assert_failure(&output);
}

#[test]
fn test_version_flag() {
    let t = Test::new();

    let output = t.cmd().arg("--version").output().unwrap();
    assert_success(&output);
    assert!(stdout(&output).contains("smenv"));
}

#[test]
fn test_errors_are_annotations_on_runner() {
    let t = Test::new();

    let output = t
        .runner_cmd()
        .args(["fetch", "--name-transformation", "snake", "--secret-ids", "a"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stdout_contains(&output, "::error::invalid name transformation 'snake'");
}

#[test]
fn test_errors_go_to_stderr_off_runner() {
    let t = Test::new();

    let output = t.fetch(&["--name-transformation", "snake", "--secret-ids", "a"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "✗ invalid name transformation 'snake'");
    assert!(!stdout(&output).contains("::error::"));
}

#[test]
fn test_verbose_flag_shows_debug_output() {
    let t = Test::new();

    let output = t
        .runner_cmd()
        .args(["--verbose", "cleanup"])
        .env("SECRETS_LIST_CLEAN_UP", r#"["A"]"#)
        .output()
        .unwrap();
    assert_success(&output);
    assert_stderr_contains(&output, "removing secret from environment");
}

#[test]
fn test_runner_debug_enables_debug_output() {
    let t = Test::new();

    let output = t
        .runner_cmd()
        .arg("cleanup")
        .env("RUNNER_DEBUG", "1")
        .env("SECRETS_LIST_CLEAN_UP", r#"["A"]"#)
        .output()
        .unwrap();
    assert_success(&output);
    assert_stderr_contains(&output, "DEBUG");
}

#[test]
fn test_default_no_debug_output() {
    let t = Test::new();

    let output = t.cleanup(r#"["A"]"#);
    assert_success(&output);
    assert_stderr_excludes(&output, "DEBUG");
}
