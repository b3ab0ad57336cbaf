use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::bundle::helpers::{default_rewrite_namespace, default_rewrite_prefix};
use crate::error::ConfigError;

/// Raw rewrite settings as they appear in config files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewriteOptions {
    #[serde(default = "default_rewrite_prefix")]
    pub prefix: String,

    #[serde(default = "default_rewrite_namespace")]
    pub namespace: String,
}

impl Default for RewriteOptions {
    fn default() -> Self {
        Self {
            prefix: default_rewrite_prefix(),
            namespace: default_rewrite_namespace(),
        }
    }
}

/// Maps internal shared-code imports onto a published package namespace.
///
/// `shared/animated` becomes `@react-spring/shared/animated` under the default
/// rule; every other path is returned untouched. A rule never produces a path
/// that it would rewrite again, so applying it twice equals applying it once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RewriteOptions", into = "RewriteOptions")]
pub struct PathRewriteRule {
    prefix: String,
    namespace: String,
}

impl PathRewriteRule {
    pub fn new(
        prefix: impl Into<String>,
        namespace: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let prefix = prefix.into();
        let namespace = namespace.into();

        if prefix.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "rewrite.prefix".to_string(),
                hint: Some("the prefix must not be empty".to_string()),
            });
        }

        // A rewritten path starts with `namespace + prefix`; it must not match again.
        if format!("{namespace}{prefix}").starts_with(&prefix) {
            return Err(ConfigError::InvalidRewriteRule { prefix, namespace });
        }

        Ok(Self { prefix, namespace })
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Rewrite `path` if it starts with the internal prefix.
    ///
    /// # Example
    ///
    /// ```
    /// use trine_config::PathRewriteRule;
    ///
    /// let rule = PathRewriteRule::default();
    /// assert_eq!(rule.apply("shared/globals"), "@react-spring/shared/globals");
    /// assert_eq!(rule.apply("react"), "react");
    /// ```
    pub fn apply<'a>(&self, path: &'a str) -> Cow<'a, str> {
        if path.starts_with(&self.prefix) {
            Cow::Owned(format!("{}{}", self.namespace, path))
        } else {
            Cow::Borrowed(path)
        }
    }
}

impl Default for PathRewriteRule {
    fn default() -> Self {
        Self {
            prefix: default_rewrite_prefix(),
            namespace: default_rewrite_namespace(),
        }
    }
}

impl TryFrom<RewriteOptions> for PathRewriteRule {
    type Error = ConfigError;

    fn try_from(options: RewriteOptions) -> Result<Self, Self::Error> {
        Self::new(options.prefix, options.namespace)
    }
}

impl From<PathRewriteRule> for RewriteOptions {
    fn from(rule: PathRewriteRule) -> Self {
        Self {
            prefix: rule.prefix,
            namespace: rule.namespace,
        }
    }
}
