//! Build request types shared across trine crates.

mod helpers;
mod rewrite;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::{Path, PathBuf};

pub use rewrite::{PathRewriteRule, RewriteOptions};

use helpers::{default_entry, default_input_dir, default_output, default_output_dir, default_true};

/// A single-entry build request.
///
/// One request yields three target configurations (module, legacy and
/// declarations) that all share `entry`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildRequest {
    /// Source entry module
    #[serde(default = "default_entry")]
    pub entry: PathBuf,

    /// Output file for the module-format bundle; the other formats derive their
    /// file names from it
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Append the compression step to code pipelines
    #[serde(default = "default_true")]
    pub minify: bool,

    /// Emit source maps for code bundles
    #[serde(default = "default_true")]
    pub sourcemap: bool,
}

impl BuildRequest {
    /// Create a request with the default flags (`minify` and `sourcemap` on).
    ///
    /// # Example
    ///
    /// ```
    /// use trine_config::BuildRequest;
    ///
    /// let request = BuildRequest::new("src/index.ts", "dist/index.js").minify(false);
    /// assert!(!request.minify);
    /// assert!(request.sourcemap);
    /// ```
    pub fn new(entry: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            entry: entry.into(),
            output: output.into(),
            minify: true,
            sourcemap: true,
        }
    }

    pub fn minify(mut self, minify: bool) -> Self {
        self.minify = minify;
        self
    }

    pub fn sourcemap(mut self, sourcemap: bool) -> Self {
        self.sourcemap = sourcemap;
        self
    }

    /// Create from serde_json::Value (for programmatic config from DB/API)
    pub fn from_value(value: Value) -> Result<Self, crate::error::ConfigError> {
        serde_json::from_value(value).map_err(|e| crate::error::ConfigError::InvalidValue {
            field: "bundle".to_string(),
            hint: Some(e.to_string()),
        })
    }
}

impl Default for BuildRequest {
    fn default() -> Self {
        Self::new(default_entry(), default_output())
    }
}

/// Options for building every entry of a directory as its own bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiBundleOptions {
    /// Directory whose immediate entries become bundles
    #[serde(default = "default_input_dir")]
    pub input_dir: PathBuf,

    /// Directory receiving one output per entry
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    #[serde(default = "default_true")]
    pub minify: bool,

    #[serde(default = "default_true")]
    pub sourcemap: bool,
}

impl MultiBundleOptions {
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            minify: true,
            sourcemap: true,
        }
    }

    pub fn minify(mut self, minify: bool) -> Self {
        self.minify = minify;
        self
    }

    pub fn sourcemap(mut self, sourcemap: bool) -> Self {
        self.sourcemap = sourcemap;
        self
    }

    /// Build the request for one directory entry, carrying over the flags.
    pub fn request(&self, entry_name: &str, output_name: &str) -> BuildRequest {
        BuildRequest {
            entry: self.input_dir.join(entry_name),
            output: self.output_dir.join(output_name),
            minify: self.minify,
            sourcemap: self.sourcemap,
        }
    }

    pub fn input_dir(&self) -> &Path {
        &self.input_dir
    }
}

impl Default for MultiBundleOptions {
    fn default() -> Self {
        Self::new(default_input_dir(), default_output_dir())
    }
}
