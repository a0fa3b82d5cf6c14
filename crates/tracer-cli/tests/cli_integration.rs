//! Runs the `tracer` binary on the fixtures in `tests/data`.

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

fn data(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

fn tracer(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tracer"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn path(name: &str) -> String {
    data(name).display().to_string()
}

#[test]
fn renders_fixture_trace() {
    let out = tracer(&[&path("train_gate.if"), &path("train_gate.xtr")]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    let expected = fs::read_to_string(data("train_gate.out")).unwrap();
    assert_eq!(String::from_utf8(out.stdout).unwrap(), expected);
}

#[test]
fn reads_model_from_stdin() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_tracer"))
        .args(["-", &path("train_gate.xtr")])
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    let model = fs::read(data("train_gate.if")).unwrap();
    child.stdin.take().unwrap().write_all(&model).unwrap();
    let out = child.wait_with_output().unwrap();

    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    let expected = fs::read_to_string(data("train_gate.out")).unwrap();
    assert_eq!(String::from_utf8(out.stdout).unwrap(), expected);
}

#[test]
fn missing_trace_file_fails() {
    let out = tracer(&[&path("train_gate.if"), &path("no_such.xtr")]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("no_such.xtr"), "{stderr}");
}

#[test]
fn truncated_trace_fails() {
    let out = tracer(&[&path("train_gate.if"), &path("truncated.xtr")]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("trace error"), "{stderr}");
}

#[test]
fn broken_model_fails() {
    // The trace file is not a model; its first line is not a section header.
    let out = tracer(&[&path("train_gate.xtr"), &path("train_gate.xtr")]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("model error"), "{stderr}");
}

#[test]
fn missing_argument_is_a_usage_error() {
    let out = tracer(&[&path("train_gate.if")]);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
}
