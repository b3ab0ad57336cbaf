//! Tests for config file discovery.

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use trine_config::{ConfigDiscovery, ConfigError};

#[test]
fn toml_takes_precedence_over_package_json() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(
        dir.path().join("trine.toml"),
        r#"
[bundle]
entry = "src/from-toml.ts"
"#,
    )
    .expect("write toml");
    fs::write(
        dir.path().join("package.json"),
        r#"{ "trine": { "bundle": { "entry": "src/from-package.ts" } } }"#,
    )
    .expect("write package.json");

    let discovery = ConfigDiscovery::new(dir.path());
    assert_eq!(discovery.find().unwrap(), dir.path().join("trine.toml"));
    let config = discovery.load().unwrap();
    assert_eq!(config.bundle.entry, PathBuf::from("src/from-toml.ts"));
}

#[test]
fn loads_package_json_field() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(
        dir.path().join("package.json"),
        r#"{
            "name": "@react-spring/core",
            "trine": {
                "multi": { "input_dir": "src/entries" },
                "rewrite": { "namespace": "@acme/" }
            }
        }"#,
    )
    .expect("write package.json");

    let config = ConfigDiscovery::new(dir.path()).load().unwrap();
    let multi = config.multi.expect("multi section");
    assert_eq!(multi.input_dir, PathBuf::from("src/entries"));
    assert!(multi.minify);
    assert_eq!(config.rewrite.apply("shared/x"), "@acme/shared/x");
}

#[test]
fn toml_with_invalid_rewrite_is_rejected() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(
        dir.path().join("trine.toml"),
        r#"
[rewrite]
prefix = "pkg"
namespace = "pkg-"
"#,
    )
    .expect("write toml");

    let result = ConfigDiscovery::new(dir.path()).load();
    assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
}

#[test]
fn load_with_profile_applies_overrides() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(
        dir.path().join("trine.toml"),
        r#"
[bundle]
entry = "src/index.ts"

[profiles.development.bundle]
minify = false
sourcemap = false
"#,
    )
    .expect("write toml");

    let config = ConfigDiscovery::new(dir.path())
        .load_with_profile("development")
        .unwrap();
    assert!(!config.bundle.minify);
    assert!(!config.bundle.sourcemap);
    assert_eq!(config.bundle.entry, PathBuf::from("src/index.ts"));
}
