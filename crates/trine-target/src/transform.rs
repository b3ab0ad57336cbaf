//! Options for the syntax-lowering step.

use indexmap::IndexMap;
use serde_json::{Value, json};

/// Browserslist query for the module-format bundle.
pub const MODERN_BROWSERS: &str = ">1%, not dead, not ie 11, not op_mini all";

/// How the emitted bundle links its modules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Linkage {
    /// import/export
    Static,
    /// require/module.exports
    Dynamic,
}

/// Syntax lowering profile for one code target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageTransform {
    pub linkage: Linkage,
    /// Browserslist query; `None` leaves the runtime default in place
    pub targets: Option<String>,
}

impl LanguageTransform {
    /// Profile for the ES module bundle.
    pub fn module() -> Self {
        Self {
            linkage: Linkage::Static,
            targets: Some(MODERN_BROWSERS.to_string()),
        }
    }

    /// Profile for the CommonJS bundle.
    pub fn legacy() -> Self {
        Self {
            linkage: Linkage::Dynamic,
            targets: None,
        }
    }

    /// Runtime helpers import ES modules only under static linkage.
    pub fn uses_es_modules(&self) -> bool {
        self.linkage == Linkage::Static
    }

    /// Options handed to the transform plugin.
    ///
    /// Module syntax is left untouched (`modules: false`); the bundler does the
    /// linking. TypeScript is already stripped by the compile step, so no
    /// TypeScript preset is listed.
    pub fn options(&self) -> IndexMap<String, Value> {
        let mut env = serde_json::Map::new();
        env.insert("loose".into(), json!(true));
        env.insert("modules".into(), json!(false));
        if let Some(targets) = &self.targets {
            env.insert("targets".into(), json!(targets));
        }

        let mut options = IndexMap::new();
        options.insert("babelrc".into(), json!(false));
        options.insert("exclude".into(), json!("**/node_modules/**"));
        options.insert("runtimeHelpers".into(), json!(true));
        options.insert(
            "presets".into(),
            json!([["@babel/preset-env", Value::Object(env)], "@babel/preset-react"]),
        );
        options.insert(
            "plugins".into(),
            json!([
                ["@babel/plugin-proposal-class-properties", { "loose": true }],
                ["@babel/plugin-proposal-object-rest-spread", { "loose": true }],
                [
                    "@babel/plugin-transform-runtime",
                    { "regenerator": false, "useESModules": self.uses_es_modules() }
                ]
            ]),
        );
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn module_profile_targets_modern_browsers() {
        let options = LanguageTransform::module().options();
        assert_eq!(options["presets"][0][1]["targets"], json!(MODERN_BROWSERS));
        assert_eq!(options["plugins"][2][1]["useESModules"], json!(true));
    }

    #[test]
    fn legacy_profile_uses_runtime_default_targets() {
        let options = LanguageTransform::legacy().options();
        assert!(options["presets"][0][1].get("targets").is_none());
        assert_eq!(options["plugins"][2][1]["useESModules"], json!(false));
        assert_eq!(options["plugins"][2][1]["regenerator"], json!(false));
    }

    #[test]
    fn shared_options_are_present() {
        let options = LanguageTransform::legacy().options();
        assert_eq!(options["babelrc"], json!(false));
        assert_eq!(options["runtimeHelpers"], json!(true));
        assert_eq!(options["presets"][1], json!("@babel/preset-react"));
        assert_eq!(options["presets"][0][1]["modules"], json!(false));
    }
}
