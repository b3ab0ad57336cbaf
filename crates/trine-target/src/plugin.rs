use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Position of a plugin in a pipeline.
///
/// Variants are declared in execution order; a pipeline is always sorted by
/// role and later plugins observe the output of earlier ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PluginRole {
    /// Resolve bare and relative imports
    Resolve,
    /// Strip types without type-checking
    Compile,
    /// Lower syntax to the compatibility profile
    Transform,
    /// Record artifact size
    SizeSnapshot,
    /// Compress and mangle identifiers
    Compress,
    /// Aggregate and re-emit type signatures
    Declarations,
}

impl PluginRole {
    /// Plugin name the bundler runtime registers for this role.
    pub fn plugin_name(self) -> &'static str {
        match self {
            Self::Resolve => "node-resolve",
            Self::Compile => "typescript",
            Self::Transform => "babel",
            Self::SizeSnapshot => "size-snapshot",
            Self::Compress => "terser",
            Self::Declarations => "dts",
        }
    }
}

/// One plugin invocation: a name plus its options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginSpec {
    pub role: PluginRole,
    pub name: String,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub options: IndexMap<String, Value>,
}

impl PluginSpec {
    /// Spec for `role` under its conventional plugin name, with no options.
    pub fn new(role: PluginRole) -> Self {
        Self {
            role,
            name: role.plugin_name().to_string(),
            options: IndexMap::new(),
        }
    }

    pub fn option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    pub fn with_options(mut self, options: IndexMap<String, Value>) -> Self {
        self.options.extend(options);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.options.get(key)
    }
}
