//! Module boundary shared by every target of a request.

use serde::{Deserialize, Serialize};

/// Classifies import specifiers as external (left as a dependency) or
/// internal (bundled).
///
/// A specifier is external iff it is neither relative (starts with `.`) nor an
/// absolute path under the filesystem root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalPredicate {
    root: String,
}

impl ExternalPredicate {
    /// Predicate for the host filesystem.
    ///
    /// On Windows the root is the drive of the current directory (`C:\`).
    pub fn native() -> Self {
        Self::with_root(filesystem_root())
    }

    pub fn with_root(root: impl Into<String>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    /// ```
    /// use trine_target::ExternalPredicate;
    ///
    /// let external = ExternalPredicate::with_root("/");
    /// assert!(!external.is_external("./util"));
    /// assert!(!external.is_external("/abs/path"));
    /// assert!(external.is_external("lodash"));
    /// ```
    pub fn is_external(&self, id: &str) -> bool {
        !id.starts_with('.') && !id.starts_with(self.root.as_str())
    }
}

impl Default for ExternalPredicate {
    fn default() -> Self {
        Self::native()
    }
}

#[cfg(windows)]
fn filesystem_root() -> String {
    std::env::current_dir()
        .ok()
        .and_then(|dir| {
            dir.ancestors()
                .last()
                .map(|root| root.to_string_lossy().into_owned())
        })
        .unwrap_or_else(|| "\\".to_string())
}

#[cfg(not(windows))]
fn filesystem_root() -> String {
    "/".to_string()
}
