//! Global configuration settings shared across profiles.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalSettings {
    /// Default log filter when neither `--verbose` nor `--quiet` is given
    #[serde(default)]
    pub log_level: Option<String>,
}
