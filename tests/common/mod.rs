//! Common test utilities for Lox integration tests.
//!
//! This module provides shared helper functions used across all integration
//! test files. Tests drive the compiled `lox` binary the way a user would:
//! scripts go through a scratch file, REPL input through a pipe.

// Each test file is compiled as a separate crate, so not all functions
// are used in every test file. This is expected behavior.
#![allow(dead_code)]

use std::io::Write;
use std::process::{Command, Stdio};

use tempfile::tempdir;

/// The captured result of one interpreter invocation.
pub struct RunResult {
    pub stdout: String,
    pub stderr: String,
    pub code: i32,
}

/// Returns the path to the lox binary built by cargo.
pub fn lox_binary() -> String {
    env!("CARGO_BIN_EXE_lox").to_string()
}

/// Writes `source` to a scratch script and runs the binary on it.
pub fn run_source(source: &str) -> RunResult {
    let dir = tempdir().expect("Failed to create temp dir");
    let script = dir.path().join("script.lox");
    std::fs::write(&script, source).expect("Failed to write script");

    let output = Command::new(lox_binary())
        .arg(&script)
        .output()
        .expect("Failed to run lox");

    RunResult {
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        code: output.status.code().unwrap_or(-1),
    }
}

/// Runs a script expected to succeed and returns its stdout.
pub fn run_ok(source: &str) -> String {
    let result = run_source(source);
    assert_eq!(
        result.code, 0,
        "Expected exit 0 for {:?}; stderr: {}",
        source, result.stderr
    );
    result.stdout
}

/// Starts the binary with no arguments and feeds `input` to its stdin.
pub fn run_repl(input: &str) -> RunResult {
    let mut child = Command::new(lox_binary())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to start lox");

    child
        .stdin
        .take()
        .expect("Child stdin not captured")
        .write_all(input.as_bytes())
        .expect("Failed to write REPL input");

    let output = child.wait_with_output().expect("Failed to wait for lox");
    RunResult {
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        code: output.status.code().unwrap_or(-1),
    }
}

/// Runs the binary with the given extra arguments (no stdin).
pub fn run_with_args(args: &[&str]) -> RunResult {
    let output = Command::new(lox_binary())
        .args(args)
        .stdin(Stdio::null())
        .output()
        .expect("Failed to run lox");

    RunResult {
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        code: output.status.code().unwrap_or(-1),
    }
}
