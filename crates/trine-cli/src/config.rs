//! Layered configuration loading.
//!
//! Priority: CLI flags > `TRINE_` environment variables > profile > config file > defaults

use figment::{
    Figment,
    providers::{Env, Serialized},
};
use std::path::Path;
use trine_config::{ConfigDiscovery, ConfigError, TrineConfig};

use crate::error::Result;

/// Prefix of environment overrides; nested keys are separated by `__`
/// (`TRINE_BUNDLE__MINIFY=false`).
pub const ENV_PREFIX: &str = "TRINE_";

pub fn load_config(
    root: &Path,
    config_path: Option<&Path>,
    profile: Option<&str>,
) -> Result<TrineConfig> {
    let discovery = ConfigDiscovery::new(root);
    let base = match config_path {
        Some(path) => discovery.load_from(&root.join(path))?,
        None => match discovery.load() {
            Ok(config) => config,
            Err(ConfigError::NotFound) => {
                tracing::debug!("no config file found, using defaults");
                TrineConfig::default()
            }
            Err(err) => return Err(err.into()),
        },
    };

    let mut base = base.materialize_profile(profile)?;
    base.profiles.clear();

    let config = Figment::new()
        .merge(Serialized::defaults(base))
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
        .extract::<TrineConfig>()
        .map_err(|e| ConfigError::InvalidValue {
            field: "environment".to_string(),
            hint: Some(e.to_string()),
        })?;

    Ok(config)
}
