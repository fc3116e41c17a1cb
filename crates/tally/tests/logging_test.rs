//! Tests for installing the file-backed tracing subscriber.

use tempfile::TempDir;

use tally::init_tracing;

#[test]
fn test_init_tracing_creates_log_and_tolerates_second_call() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let first = dir.path().join("first.log");
    let second = dir.path().join("second.log");

    init_tracing(&first).expect("First init failed");
    init_tracing(&second).expect("Second init failed");

    assert!(first.is_file());
    assert!(second.is_file());
}

#[test]
fn test_init_tracing_missing_directory_is_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("absent").join("tally.log");
    assert!(init_tracing(&path).is_err());
}
