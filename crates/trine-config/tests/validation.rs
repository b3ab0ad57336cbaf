//! Tests for filesystem validation.

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use trine_config::{ConfigError, ConfigValidator, FsValidator, MultiBundleOptions, TrineConfig};

#[test]
fn validate_catches_missing_entry() {
    let dir = TempDir::new().expect("tempdir");
    let mut cfg = TrineConfig::default();
    cfg.bundle.entry = PathBuf::from("src/nonexistent.ts");

    match FsValidator::new(dir.path()).validate(&cfg) {
        Err(ConfigError::EntryNotFound { path }) => {
            assert!(path.ends_with("src/nonexistent.ts"));
        }
        other => panic!("expected EntryNotFound error, got {other:?}"),
    }
}

#[test]
fn validate_succeeds_when_entry_exists() {
    let dir = TempDir::new().expect("tempdir");
    fs::create_dir(dir.path().join("src")).expect("create src dir");
    fs::write(dir.path().join("src/index.ts"), "export {};").expect("write entry");

    let cfg = TrineConfig::default();
    assert!(FsValidator::new(dir.path()).validate(&cfg).is_ok());
}

#[test]
fn validate_requires_multi_input_directory() {
    let dir = TempDir::new().expect("tempdir");
    let mut cfg = TrineConfig::default();
    cfg.multi = Some(MultiBundleOptions::new("entries", "dist"));

    assert!(matches!(
        FsValidator::new(dir.path()).validate(&cfg),
        Err(ConfigError::InputDirNotFound { .. })
    ));

    fs::create_dir(dir.path().join("entries")).expect("create entries");
    assert!(FsValidator::new(dir.path()).validate(&cfg).is_ok());
}

#[test]
fn validate_rejects_file_as_multi_input() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(dir.path().join("entries"), "").expect("write file");
    let mut cfg = TrineConfig::default();
    cfg.multi = Some(MultiBundleOptions::new("entries", "dist"));

    assert!(FsValidator::new(dir.path()).validate(&cfg).is_err());
}
