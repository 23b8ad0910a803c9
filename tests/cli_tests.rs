//! Integration tests for the command-line binary
//!
//! Runs the built binary and checks exit codes, stdout lines, and whether an
//! output file was produced.

mod common;

use common::*;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fit_to_csv"))
        .args(args)
        .output()
        .expect("Failed to run fit_to_csv")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(|line| line.to_string())
        .collect()
}

#[test]
fn test_no_arguments_prints_usage_and_fails() {
    let output = run_cli(&[]);

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage:"), "Usage text expected: {stdout}");
}

#[test]
fn test_successful_conversion_prints_one_line() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let fit_path = write_ride(temp_dir.path());
    let csv_path = temp_dir.path().join("ride.csv");

    let output = run_cli(&[fit_path.to_str().unwrap()]);

    assert!(
        output.status.success(),
        "Conversion failed: {}",
        String::from_utf8_lossy(&output.stdout)
    );
    let lines = stdout_lines(&output);
    assert_eq!(
        lines,
        vec![format!(
            "Successfully converted {} to {}",
            fit_path.display(),
            csv_path.display()
        )]
    );
    assert!(csv_path.exists(), "CSV file should be created");
}

#[test]
fn test_explicit_output_and_extra_arguments() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let fit_path = write_ride(temp_dir.path());
    let csv_path = temp_dir.path().join("table.csv");
    let ignored_path = temp_dir.path().join("ignored.csv");

    let output = run_cli(&[
        fit_path.to_str().unwrap(),
        csv_path.to_str().unwrap(),
        ignored_path.to_str().unwrap(),
    ]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_lines(&output).len(), 1);
    assert!(csv_path.exists());
    assert!(!ignored_path.exists());
    assert!(!temp_dir.path().join("ride.csv").exists());
}

#[test]
fn test_missing_input_prints_one_error_line_and_no_csv() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let fit_path = temp_dir.path().join("nope.fit");

    let output = run_cli(&[fit_path.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 1, "Exactly one line expected: {lines:?}");
    assert!(lines[0].starts_with("Error converting FIT file: "));
    assert!(output.stderr.is_empty());
    assert!(!temp_dir.path().join("nope.csv").exists());
}
