//! End-to-end tests of the wordstats binary.

use std::io::Write;
use std::process::{Command, Output};

use tempfile::NamedTempFile;

fn wordstats(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_wordstats"))
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn test_missing_file_argument_prints_usage() {
    let output = wordstats(&[]);

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage:"));
}

#[test]
fn test_extra_argument_prints_usage() {
    let output = wordstats(&["first.txt", "second.txt"]);

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage:"));
}

#[test]
fn test_human_report() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"the science of the neuroscience lab\nThe end.\n")
        .unwrap();

    let output = wordstats(&[file.path().to_str().unwrap()]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert!(lines[0].starts_with("Q1. How many words are in "));
    assert!(lines[1].starts_with("Count words took: "));
    assert_eq!(lines[2], "7");
    assert!(stdout.contains("5:<neuroscience>"));
}

#[test]
fn test_file_without_words_fails() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"? !\nx\n").unwrap();

    let output = wordstats(&[file.path().to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error: Empty result"));
}
