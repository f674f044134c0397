//! CLI dispatch tests: argument handling and exit codes.

mod common;

use common::{run_source, run_with_args};

#[test]
fn test_too_many_arguments_prints_usage() {
    let result = run_with_args(&["one.lox", "two.lox"]);
    assert_eq!(result.code, 64);
    assert!(
        result.stderr.contains("Usage: lox [script]"),
        "stderr: {}",
        result.stderr
    );
}

#[test]
fn test_missing_file_is_reported() {
    let result = run_with_args(&["does-not-exist.lox"]);
    assert_eq!(result.code, 66);
    assert!(
        result.stderr.contains("Could not read 'does-not-exist.lox'"),
        "stderr: {}",
        result.stderr
    );
}

#[test]
fn test_clean_script_exits_zero() {
    assert_eq!(run_source("print 1;").code, 0);
}

#[test]
fn test_parse_error_exits_65() {
    assert_eq!(run_source("print 1").code, 65);
}

#[test]
fn test_runtime_error_exits_70() {
    assert_eq!(run_source("print missing;").code, 70);
}

#[test]
fn test_output_goes_to_stdout_only() {
    let result = run_source("print \"out\";");
    assert_eq!(result.stdout, "out\n");
    assert_eq!(result.stderr, "");
}
