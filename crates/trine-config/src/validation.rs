//! Pluggable config validation strategies
//!
//! Separates filesystem validation (for CLI use) from schema validation (for library use).

use std::path::{Path, PathBuf};

use crate::config::TrineConfig;
use crate::error::{ConfigError, Result};

/// Trait for pluggable config validation strategies
pub trait ConfigValidator {
    fn validate(&self, config: &TrineConfig) -> Result<()>;
}

/// Schema-only validation (no filesystem checks)
///
/// # Example
///
/// ```
/// use trine_config::{ConfigValidator, SchemaValidator, TrineConfig};
///
/// SchemaValidator.validate(&TrineConfig::default()).unwrap();
/// ```
pub struct SchemaValidator;

impl ConfigValidator for SchemaValidator {
    fn validate(&self, config: &TrineConfig) -> Result<()> {
        if let Some(multi) = &config.multi {
            if multi.input_dir.as_os_str().is_empty() {
                return Err(empty_path("multi.input_dir"));
            }
            if multi.output_dir.as_os_str().is_empty() {
                return Err(empty_path("multi.output_dir"));
            }
            return Ok(());
        }

        if config.bundle.entry.as_os_str().is_empty() {
            return Err(empty_path("bundle.entry"));
        }
        if config.bundle.output.file_name().is_none() {
            return Err(ConfigError::SchemaValidation {
                message: "bundle.output must name a file".to_string(),
                hint: Some("Use a path such as 'dist/index.js'".to_string()),
            });
        }

        Ok(())
    }
}

fn empty_path(field: &str) -> ConfigError {
    ConfigError::SchemaValidation {
        message: format!("{field} cannot be empty"),
        hint: Some(format!("Set '{field}' or remove it to use the default")),
    }
}

/// Filesystem validator (for CLI use)
///
/// Checks that the entry (or the multi-entry input directory) exists under `root`.
pub struct FsValidator {
    root: PathBuf,
}

impl FsValidator {
    /// Create a new filesystem validator with a root directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl ConfigValidator for FsValidator {
    fn validate(&self, config: &TrineConfig) -> Result<()> {
        SchemaValidator.validate(config)?;

        if let Some(multi) = &config.multi {
            let path = self.root.join(&multi.input_dir);
            if !path.is_dir() {
                return Err(ConfigError::InputDirNotFound { path });
            }
            return Ok(());
        }

        let path = self.root.join(&config.bundle.entry);
        if !path.exists() {
            return Err(ConfigError::EntryNotFound { path });
        }

        Ok(())
    }
}

/// Convenience function for schema-only validation
pub fn validate_schema(config: &TrineConfig) -> Result<()> {
    SchemaValidator.validate(config)
}

/// Convenience function for filesystem validation
pub fn validate_fs(config: &TrineConfig, root: impl AsRef<Path>) -> Result<()> {
    FsValidator::new(root).validate(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundle::MultiBundleOptions;

    #[test]
    fn schema_validator_accepts_defaults() {
        assert!(validate_schema(&TrineConfig::default()).is_ok());
    }

    #[test]
    fn schema_validator_rejects_empty_entry() {
        let mut config = TrineConfig::default();
        config.bundle.entry = PathBuf::new();
        assert!(matches!(
            SchemaValidator.validate(&config),
            Err(ConfigError::SchemaValidation { .. })
        ));
    }

    #[test]
    fn schema_validator_rejects_directory_like_output() {
        let mut config = TrineConfig::default();
        config.bundle.output = PathBuf::from("..");
        assert!(SchemaValidator.validate(&config).is_err());
    }

    #[test]
    fn schema_validator_checks_multi_instead_of_bundle() {
        let mut config = TrineConfig::default();
        config.bundle.entry = PathBuf::new();
        config.multi = Some(MultiBundleOptions::default());
        assert!(SchemaValidator.validate(&config).is_ok());

        config.multi = Some(MultiBundleOptions::new("", "dist"));
        assert!(SchemaValidator.validate(&config).is_err());
    }
}
