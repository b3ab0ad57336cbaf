//! Ordered plugin sequences per target format.

use serde_json::json;

use crate::plugin::{PluginRole, PluginSpec};
use crate::transform::LanguageTransform;

/// Source extensions the resolver may append, in lookup order.
pub const RESOLVE_EXTENSIONS: [&str; 3] = [".tsx", ".ts", ".js"];

/// Pipeline for a code bundle.
///
/// resolve → compile → transform → size snapshot, followed by compression when
/// `minify` is set. Type errors are not caught here: the compile step strips
/// types with checking turned off.
pub fn code_pipeline(transform: &LanguageTransform, minify: bool) -> Vec<PluginSpec> {
    let mut plugins = vec![
        PluginSpec::new(PluginRole::Resolve).option("extensions", json!(RESOLVE_EXTENSIONS)),
        PluginSpec::new(PluginRole::Compile).option("check", false),
        PluginSpec::new(PluginRole::Transform).with_options(transform.options()),
        PluginSpec::new(PluginRole::SizeSnapshot),
    ];

    if minify {
        plugins.push(PluginSpec::new(PluginRole::Compress));
    }

    debug_assert!(plugins.windows(2).all(|pair| pair[0].role < pair[1].role));
    plugins
}

/// Pipeline for the declaration bundle: a single type-aggregation step.
pub fn declaration_pipeline() -> Vec<PluginSpec> {
    vec![PluginSpec::new(PluginRole::Declarations)]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roles(plugins: &[PluginSpec]) -> Vec<PluginRole> {
        plugins.iter().map(|plugin| plugin.role).collect()
    }

    #[test]
    fn minified_pipeline_ends_with_compression() {
        let plugins = code_pipeline(&LanguageTransform::module(), true);
        assert_eq!(
            roles(&plugins),
            [
                PluginRole::Resolve,
                PluginRole::Compile,
                PluginRole::Transform,
                PluginRole::SizeSnapshot,
                PluginRole::Compress,
            ]
        );
    }

    #[test]
    fn unminified_pipeline_has_no_compression() {
        let plugins = code_pipeline(&LanguageTransform::legacy(), false);
        assert_eq!(plugins.len(), 4);
        assert!(plugins.iter().all(|p| p.role != PluginRole::Compress));
    }

    #[test]
    fn resolver_is_restricted_to_source_extensions() {
        let plugins = code_pipeline(&LanguageTransform::module(), false);
        assert_eq!(
            plugins[0].get("extensions"),
            Some(&json!([".tsx", ".ts", ".js"]))
        );
        assert_eq!(plugins[1].get("check"), Some(&json!(false)));
    }

    #[test]
    fn declaration_pipeline_is_single_step() {
        assert_eq!(roles(&declaration_pipeline()), [PluginRole::Declarations]);
    }
}
