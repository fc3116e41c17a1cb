//! Tests for loading `tally.toml`.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use tally::TallyConfig;

#[test]
fn test_missing_file_uses_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = TallyConfig::load_or_default(dir.path().join("absent.toml")).expect("Load failed");
    assert_eq!(config, TallyConfig::default());
    assert_eq!(config.store_path(), &PathBuf::from("tally_store.json"));
    assert_eq!(config.log_path(), &PathBuf::from("tally.log"));
}

#[test]
fn test_partial_file_fills_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("tally.toml");
    fs::write(&path, "store_path = \"/tmp/scores.json\"\n").expect("Write failed");

    let config = TallyConfig::from_file(&path).expect("Load failed");
    assert_eq!(config.store_path(), &PathBuf::from("/tmp/scores.json"));
    assert_eq!(config.log_path(), &PathBuf::from("tally.log"));
}

#[test]
fn test_invalid_toml_is_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("tally.toml");
    fs::write(&path, "store_path = [not valid").expect("Write failed");

    let result = TallyConfig::load_or_default(&path);
    assert!(result.is_err());
}

#[test]
fn test_store_override() {
    let config = TallyConfig::default().with_store_path("elsewhere.json");
    assert_eq!(config.store_path(), &PathBuf::from("elsewhere.json"));
}
