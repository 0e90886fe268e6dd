//! End-to-end tests for the `luatok` binary.

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn luatok(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_luatok"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn luatok");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(stdin.as_bytes())
        .expect("write stdin");
    child.wait_with_output().expect("wait for luatok")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn source_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}

// -----------------------------------------------------------
// Exit codes.
// -----------------------------------------------------------

#[test]
fn clean_input_exits_zero() {
    let output = luatok(&[], "local x = 1\n");
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "1\tkeyword\tlocal\n1\tidentifier\tx\n1\toperator\t=\n1\tnumber\t1\n"
    );
    assert!(stderr(&output).is_empty());
}

#[test]
fn diagnostics_exit_one() {
    let output = luatok(&["-"], "a $ b\nlocal x\n");
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout(&output),
        "1\tidentifier\ta\n2\tkeyword\tlocal\n2\tidentifier\tx\n"
    );
}

#[test]
fn unreadable_file_exits_one() {
    let dir = tempfile::tempdir().expect("temp dir");
    let missing = dir.path().join("missing.lua");
    let output = luatok(&[missing.to_str().expect("utf-8 path")], "");
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("failed to read"));
}

#[test]
fn bad_flag_exits_two() {
    let output = luatok(&["--recovery", "word"], "");
    assert_eq!(output.status.code(), Some(2));
}

// -----------------------------------------------------------
// Output modes and diagnostics.
// -----------------------------------------------------------

#[test]
fn count_mode_per_file() {
    let clean = source_file("return 1\n");
    let broken = source_file("x = 1.2.3\ny = 2\n");
    let clean_path = clean.path().to_str().expect("utf-8 path");
    let broken_path = broken.path().to_str().expect("utf-8 path");

    let output = luatok(&["--count", clean_path, broken_path], "");
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout(&output),
        format!(
            "{clean_path}: 2 token(s), 0 diagnostic(s)\n\
             {broken_path}: 5 token(s), 1 diagnostic(s)\n"
        )
    );
}

#[test]
fn lexeme_recovery_flag() {
    let output = luatok(&["--recovery", "lexeme"], "a $ b\n");
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout(&output),
        "1\tidentifier\ta\n1\tidentifier\tb\n"
    );
}

#[test]
fn diagnostic_line_logged_once() {
    let output = luatok(&[], "a $ b\n");
    let log = stderr(&output);
    assert!(log.contains("Error on line 1: unexpected character: $"), "{log}");
    assert!(!log.contains("line=1"), "{log}");
}
