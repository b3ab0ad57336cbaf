//! High-level configuration structure for trine.
//!
//! This module provides the main `TrineConfig` struct and profile merging logic.
//! For file discovery, see the `discovery` module.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::bundle::{BuildRequest, MultiBundleOptions, PathRewriteRule};
use crate::error::{ConfigError, Result as ConfigResult};
use crate::settings::GlobalSettings;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrineConfig {
    /// Single-entry build
    #[serde(default)]
    pub bundle: BuildRequest,

    /// Directory build; takes precedence over `bundle` when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multi: Option<MultiBundleOptions>,

    #[serde(default)]
    pub rewrite: PathRewriteRule,

    #[serde(default)]
    pub settings: GlobalSettings,

    #[serde(default)]
    pub profiles: HashMap<String, ProfileConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileConfig {
    #[serde(default)]
    pub bundle: Value,

    #[serde(default)]
    pub multi: Value,

    #[serde(default)]
    pub rewrite: Value,

    #[serde(default)]
    pub settings: Value,
}

impl TrineConfig {
    /// Create from serde_json::Value (for programmatic config from DB/API)
    ///
    /// # Example
    ///
    /// ```
    /// use trine_config::TrineConfig;
    /// use serde_json::json;
    /// use std::path::PathBuf;
    ///
    /// let value = json!({
    ///     "bundle": {
    ///         "entry": "src/index.tsx",
    ///         "minify": false
    ///     }
    /// });
    ///
    /// let config = TrineConfig::from_value(value).unwrap();
    /// assert_eq!(config.bundle.entry, PathBuf::from("src/index.tsx"));
    /// assert!(!config.bundle.minify);
    /// ```
    pub fn from_value(value: Value) -> ConfigResult<Self> {
        serde_json::from_value(value).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// Convert to serde_json::Value
    pub fn to_value(&self) -> ConfigResult<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// Deep-merge the named profile over the base sections.
    ///
    /// Unknown profile names leave the config unchanged.
    pub fn materialize_profile(mut self, profile: Option<&str>) -> ConfigResult<Self> {
        let Some(name) = profile else {
            return Ok(self);
        };
        let Some(profile_cfg) = self.profiles.get(name).cloned() else {
            tracing::debug!(profile = name, "profile not defined, using base config");
            return Ok(self);
        };

        if !profile_cfg.bundle.is_null() {
            self.bundle = merged(&self.bundle, &profile_cfg.bundle)?;
        }

        if !profile_cfg.multi.is_null() {
            let mut base = match &self.multi {
                Some(multi) => to_override_value(multi)?,
                None => Value::Null,
            };
            merge_values(&mut base, &profile_cfg.multi);
            self.multi = if base.is_null() {
                None
            } else {
                Some(from_override_value(base)?)
            };
        }

        if !profile_cfg.rewrite.is_null() {
            self.rewrite = merged(&self.rewrite, &profile_cfg.rewrite)?;
        }

        if !profile_cfg.settings.is_null() {
            self.settings = merged(&self.settings, &profile_cfg.settings)?;
        }

        Ok(self)
    }
}

fn merged<T>(base: &T, update: &Value) -> ConfigResult<T>
where
    T: Serialize + for<'de> Deserialize<'de>,
{
    let mut value = to_override_value(base)?;
    merge_values(&mut value, update);
    from_override_value(value)
}

fn to_override_value<T: Serialize>(value: &T) -> ConfigResult<Value> {
    serde_json::to_value(value).map_err(|err| ConfigError::InvalidProfileOverride {
        message: err.to_string(),
    })
}

fn from_override_value<T: for<'de> Deserialize<'de>>(value: Value) -> ConfigResult<T> {
    serde_json::from_value(value).map_err(|err| ConfigError::InvalidProfileOverride {
        message: err.to_string(),
    })
}

fn merge_values(target: &mut Value, update: &Value) {
    match (target, update) {
        (Value::Object(target_map), Value::Object(update_map)) => {
            for (key, value) in update_map {
                merge_values(target_map.entry(key.clone()).or_insert(Value::Null), value);
            }
        }
        (target_slot, _) => {
            *target_slot = update.clone();
        }
    }
}
