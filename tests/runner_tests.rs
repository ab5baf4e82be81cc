// Process-capture coverage using /bin/sh as a stand-in interpreter: it takes
// the source path as its sole argument and emits lines on stdout, which is
// all the harness asks of a backend.

#![cfg(unix)]

mod common;

use common::write_fixture;
use loxtest::runner::{ProcessRunner, Runner};
use loxtest::suite::run_file;
use loxtest::HarnessError;
use std::path::Path;
use tempfile::tempdir;

#[test]
fn missing_binary_is_a_process_launch_error() {
    let runner = ProcessRunner::new("./no-such-interpreter");
    let err = runner.execute(Path::new("any.lox")).unwrap_err();
    assert!(matches!(err, HarnessError::ProcessLaunch { .. }));
}

#[test]
fn captures_stdout_lines_in_emission_order() {
    let dir = tempdir().unwrap();
    let script = write_fixture(dir.path(), "emit.lox", "echo 3\necho 1.0\necho done\n");

    let runner = ProcessRunner::new("/bin/sh");
    let lines: Vec<Vec<u8>> = runner
        .execute(&script)
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(lines, vec![b"3".to_vec(), b"1.0".to_vec(), b"done".to_vec()]);
}

#[test]
fn abandoning_the_stream_still_reaps_the_child() {
    let dir = tempdir().unwrap();
    let script = write_fixture(
        dir.path(),
        "chatty.lox",
        "echo first\necho second\necho third\n",
    );

    let runner = ProcessRunner::new("/bin/sh");
    let mut lines = runner.execute(&script).unwrap();
    let first = lines.next().unwrap().unwrap();
    assert_eq!(first, b"first");
    // Dropping with output unread must close the pipe and wait, not hang.
    drop(lines);
}

#[test]
fn run_file_passes_end_to_end() {
    let dir = tempdir().unwrap();
    // Valid sh and valid annotation at once: sh ignores everything after `#`.
    let script = write_fixture(
        dir.path(),
        "ok.lox",
        "echo 3 # // expect: 3\necho 1.0 # // expect: 1\n",
    );

    let runner = ProcessRunner::new("/bin/sh");
    let verdict = run_file(&runner, &script).unwrap();
    assert!(!verdict.failed);
}

#[test]
fn run_file_diagnoses_a_real_mismatch() {
    let dir = tempdir().unwrap();
    let script = write_fixture(
        dir.path(),
        "bad.lox",
        "echo 3 # // expect: 3\necho 1.5 # // expect: 1\n",
    );

    let runner = ProcessRunner::new("/bin/sh");
    let verdict = run_file(&runner, &script).unwrap();
    assert!(verdict.failed);
    assert_eq!(verdict.mismatches.len(), 1);
    assert_eq!(verdict.mismatches[0].line_number, 2);
    assert_eq!(verdict.mismatches[0].actual, "1.5");
}
