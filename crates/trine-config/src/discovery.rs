//! File-based config discovery for CLI use
//!
//! Handles finding and loading trine configuration files from the filesystem.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::config::TrineConfig;
use crate::error::{ConfigError, Result};

/// Name of the standalone config file
pub const CONFIG_FILE: &str = "trine.toml";

/// Field read from `package.json` when no standalone config exists
pub const PACKAGE_FIELD: &str = "trine";

/// File-based configuration discovery
///
/// Searches for trine configuration files in conventional locations and loads them.
/// Library users should prefer `TrineConfig::from_value()`.
///
/// # Example
///
/// ```no_run
/// use trine_config::ConfigDiscovery;
///
/// let discovery = ConfigDiscovery::new(".");
/// let config = discovery.load().unwrap();
/// ```
pub struct ConfigDiscovery {
    root: PathBuf,
}

impl ConfigDiscovery {
    /// Create a new config discovery with a root directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Find a config file in the root directory
    ///
    /// Searches in this order:
    /// 1. TOML config: trine.toml
    /// 2. package.json (trine field)
    pub fn find(&self) -> Option<PathBuf> {
        let toml_path = self.root.join(CONFIG_FILE);
        if toml_path.exists() {
            return Some(toml_path);
        }

        let pkg_path = self.root.join("package.json");
        let content = fs::read_to_string(&pkg_path).ok()?;
        let parsed = serde_json::from_str::<Value>(&content).ok()?;
        match parsed.get(PACKAGE_FIELD) {
            Some(field) if !field.is_null() => Some(pkg_path),
            _ => None,
        }
    }

    /// Load config from discovered file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if no config file is found.
    pub fn load(&self) -> Result<TrineConfig> {
        let path = self.find().ok_or(ConfigError::NotFound)?;
        tracing::debug!(path = %path.display(), "loading config");
        self.load_from(&path)
    }

    /// Load config with profile merging
    pub fn load_with_profile(&self, profile: &str) -> Result<TrineConfig> {
        self.load()?.materialize_profile(Some(profile))
    }

    /// Load config from a specific file path
    pub fn load_from(&self, path: &Path) -> Result<TrineConfig> {
        if path.file_name() == Some(std::ffi::OsStr::new("package.json")) {
            return self.load_from_package_json(path);
        }

        let content = fs::read_to_string(path)?;

        let toml_val: toml::Value =
            toml::from_str(&content).map_err(|e| ConfigError::InvalidValue {
                field: "toml".to_string(),
                hint: Some(format!("Invalid TOML syntax: {}", e)),
            })?;

        let value = serde_json::to_value(toml_val).map_err(|e| ConfigError::InvalidValue {
            field: "toml".to_string(),
            hint: Some(format!("TOML to JSON conversion failed: {}", e)),
        })?;

        TrineConfig::from_value(value)
    }

    fn load_from_package_json(&self, path: &Path) -> Result<TrineConfig> {
        let content = fs::read_to_string(path)?;

        let parsed: Value =
            serde_json::from_str(&content).map_err(|e| ConfigError::InvalidValue {
                field: "package.json".to_string(),
                hint: Some(format!("Invalid JSON: {}", e)),
            })?;

        match parsed.get(PACKAGE_FIELD) {
            Some(value) if !value.is_null() => TrineConfig::from_value(value.clone()),
            _ => Err(ConfigError::InvalidValue {
                field: PACKAGE_FIELD.to_string(),
                hint: Some("Add a 'trine' field to your package.json".to_string()),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn find_returns_none_when_no_config() {
        let dir = TempDir::new().unwrap();
        let discovery = ConfigDiscovery::new(dir.path());
        assert!(discovery.find().is_none());
    }

    #[test]
    fn find_ignores_package_json_without_field() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("package.json"), r#"{ "name": "spring" }"#).unwrap();
        assert!(ConfigDiscovery::new(dir.path()).find().is_none());
    }

    #[test]
    fn load_returns_not_found_when_no_config() {
        let dir = TempDir::new().unwrap();
        let result = ConfigDiscovery::new(dir.path()).load();
        assert!(matches!(result, Err(ConfigError::NotFound)));
    }

    #[test]
    fn invalid_toml_reports_field() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "[bundle\nentry = ").unwrap();
        let result = ConfigDiscovery::new(dir.path()).load();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { ref field, .. }) if field == "toml"
        ));
    }
}
