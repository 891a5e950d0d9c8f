//! Command line tests driving the built binary

use std::ffi::OsStr;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use tempfile::tempdir;

/// Run `bulk` with `args` inside `dir`, feeding `input` on stdin
fn run_bulk(dir: &Path, args: &[&str], input: &str) -> Output {
    let args: Vec<&OsStr> = args.iter().map(OsStr::new).collect();
    run_bulk_os(dir, &args, input)
}

fn run_bulk_os(dir: &Path, args: &[&OsStr], input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_bulk"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    // A rejected configuration may exit before reading stdin
    let _ = child.stdin.take().unwrap().write_all(input.as_bytes());
    child.wait_with_output().unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn log_files(dir: &Path) -> Vec<String> {
    let mut contents: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|path| {
            let name = path.file_name().unwrap().to_string_lossy();
            name.starts_with("bulk") && name.ends_with(".log")
        })
        .map(|path| fs::read_to_string(path).unwrap())
        .collect();
    contents.sort();
    contents
}

#[test]
fn test_size_batching_output() {
    let dir = tempdir().unwrap();
    let output = run_bulk(dir.path(), &["3"], "a\nb\nc\nd\ne\nf\ng\n");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout, "bulk: a, b, c\nbulk: d, e, f\nbulk: g\n");

    // Same-second bulks share a file name, so there may be fewer files than
    // bulks; every file still holds exactly one console line.
    let files = log_files(dir.path());
    assert!(!files.is_empty() && files.len() <= 3);
    let lines: Vec<String> = stdout.split_inclusive('\n').map(str::to_string).collect();
    for content in files {
        assert!(lines.contains(&content), "unexpected log content {content:?}");
    }
}

#[test]
fn test_dynamic_block_output() {
    let dir = tempdir().unwrap();
    let output = run_bulk(dir.path(), &["2"], "a\n{\nx\ny\nz\n}\nb\n");

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "bulk: a\nbulk: x, y, z\nbulk: b\n"
    );
}

#[test]
fn test_empty_input_produces_nothing() {
    let dir = tempdir().unwrap();
    let output = run_bulk(dir.path(), &["4"], "");

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert!(log_files(dir.path()).is_empty());
}

#[test]
fn test_stray_close_produces_nothing() {
    let dir = tempdir().unwrap();
    let output = run_bulk(dir.path(), &["1"], "}\n");

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert!(log_files(dir.path()).is_empty());
}

#[test]
fn test_missing_argument_is_usage_error() {
    let dir = tempdir().unwrap();
    let output = run_bulk(dir.path(), &[], "a\n");

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(stderr(&output).contains("usage: bulk <bulk_size>"));
}

#[test]
fn test_extra_argument_is_usage_error() {
    let dir = tempdir().unwrap();
    let output = run_bulk(dir.path(), &["3", "4"], "a\n");

    assert!(!output.status.success());
    assert!(stderr(&output).contains("usage: bulk <bulk_size>"));
}

#[test]
fn test_invalid_bulk_size() {
    let dir = tempdir().unwrap();
    let output = run_bulk(dir.path(), &["abc"], "a\n");

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(stderr(&output).contains("invalid bulk size: abc"));
    assert!(log_files(dir.path()).is_empty());
}

#[test]
fn test_out_of_range_bulk_size() {
    let dir = tempdir().unwrap();
    let output = run_bulk(dir.path(), &["99999999999999999999999999"], "a\n");

    assert!(!output.status.success());
    assert!(stderr(&output).contains("bulk size out of range"));
}

#[test]
fn test_zero_bulk_size_rejected() {
    let dir = tempdir().unwrap();
    let output = run_bulk(dir.path(), &["0"], "a\n");

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(stderr(&output).contains("bulk size must be positive"));
}

#[cfg(unix)]
#[test]
fn test_non_utf8_bulk_size_is_invalid() {
    use std::os::unix::ffi::OsStrExt;

    let dir = tempdir().unwrap();
    let output = run_bulk_os(dir.path(), &[OsStr::from_bytes(b"\xff")], "a\n");

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(stderr(&output).contains("invalid bulk size"));
    assert!(!stderr(&output).contains("panicked"));
}
