//! Tests for default values.

use std::path::PathBuf;
use trine_config::{
    BuildRequest, GlobalSettings, MultiBundleOptions, PathRewriteRule, TrineConfig,
};

#[test]
fn build_request_defaults() {
    let request = BuildRequest::default();
    assert_eq!(request.entry, PathBuf::from("src/index.ts"));
    assert_eq!(request.output, PathBuf::from("dist/index.js"));
    assert!(request.minify);
    assert!(request.sourcemap);
}

#[test]
fn multi_bundle_defaults() {
    let multi = MultiBundleOptions::default();
    assert_eq!(multi.input_dir, PathBuf::from("src"));
    assert_eq!(multi.output_dir, PathBuf::from("dist"));
    assert!(multi.minify);
    assert!(multi.sourcemap);
}

#[test]
fn rewrite_rule_defaults() {
    let rule = PathRewriteRule::default();
    assert_eq!(rule.prefix(), "shared");
    assert_eq!(rule.namespace(), "@react-spring/");
}

#[test]
fn trine_config_defaults() {
    let config = TrineConfig::default();
    assert_eq!(config.bundle, BuildRequest::default());
    assert!(config.multi.is_none());
    assert!(config.profiles.is_empty());
    assert_eq!(config.settings, GlobalSettings::default());
}

#[test]
fn empty_value_matches_default() {
    let config = TrineConfig::from_value(serde_json::json!({})).unwrap();
    assert_eq!(config, TrineConfig::default());
}
