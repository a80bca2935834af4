//! Tests for `smenv completions`.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_completions_bash_outputs_script() {
    let t = Test::new();

    let output = t.cmd().args(["completions", "bash"]).output().unwrap();
    assert_success(&output);
    let out = stdout(&output);
    assert!(out.contains("_smenv"));
    assert!(out.contains("fetch"));
}

#[test]
fn test_completions_zsh_outputs_script() {
    let t = Test::new();

    t.cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("#compdef smenv"));
}

#[test]
fn test_completions_fish_outputs_script() {
    let t = Test::new();

    t.cmd()
        .args(["completions", "fish"])
        .assert()
        .success()
        .stdout(predicate::str::contains("complete -c smenv").and(predicate::str::contains("cleanup")));
}

#[test]
fn test_completions_unknown_shell_fails() {
    let t = Test::new();

    let output = t.cmd().args(["completions", "tcsh"]).output().unwrap();
    assert_failure(&output);
}
