//! Tests for `smenv cleanup`.

use crate::support::*;

#[test]
fn test_cleanup_clears_listed_variables() {
    let t = Test::new();

    let output = t.cleanup(r#"["DB_USER","DB_PASSWORD"]"#);
    assert_success(&output);
    assert_stdout_contains(&output, "removed 2 variable(s)");

    let blocks = parse_env_blocks(&t.env_file_contents());
    assert_eq!(
        blocks,
        vec![
            ("DB_USER".to_string(), String::new()),
            ("DB_PASSWORD".to_string(), String::new()),
            ("SECRETS_LIST_CLEAN_UP".to_string(), String::new()),
        ]
    );
}

#[test]
fn test_cleanup_empty_list_clears_only_itself() {
    let t = Test::new();

    let output = t.cleanup("[]");
    assert_success(&output);

    let blocks = parse_env_blocks(&t.env_file_contents());
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].0, "SECRETS_LIST_CLEAN_UP");
}

#[test]
fn test_cleanup_without_list_is_noop() {
    let t = Test::new();

    let output = t.runner_cmd().arg("cleanup").output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "nothing to clean up");
    assert!(t.env_file_contents().is_empty());
}

#[test]
fn test_cleanup_malformed_list_fails() {
    let t = Test::new();

    let output = t.cleanup("DB_USER,DB_PASSWORD");
    assert_failure(&output);
    assert_stdout_contains(&output, "::error::invalid cleanup list");
    assert!(t.env_file_contents().is_empty());
}

#[test]
fn test_cleanup_off_runner_warns() {
    let t = Test::new();

    let output = t
        .cmd()
        .arg("cleanup")
        .env("SECRETS_LIST_CLEAN_UP", r#"["A"]"#)
        .output()
        .unwrap();
    assert_success(&output);
    assert_stderr_contains(&output, "GITHUB_ENV is not set");
    assert!(t.env_file_contents().is_empty());
}

#[test]
fn test_cleanup_appends_to_existing_file() {
    let t = Test::new();
    std::fs::write(t.env_file(), "KEEP<<EOF\nme\nEOF\n").unwrap();

    let output = t.cleanup(r#"["A"]"#);
    assert_success(&output);

    let blocks = parse_env_blocks(&t.env_file_contents());
    assert_eq!(blocks[0], ("KEEP".to_string(), "me".to_string()));
    assert_eq!(blocks[1], ("A".to_string(), String::new()));
}
