//! Error types for configuration validation and loading.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Filesystem validation errors (for CLI use)
    #[error("entry path not found: {}", .path.display())]
    EntryNotFound { path: PathBuf },

    #[error("input directory not found: {}", .path.display())]
    InputDirNotFound { path: PathBuf },

    // Config parsing/loading errors
    #[error("config not found")]
    NotFound,

    #[error(
        "invalid config value for `{field}`{}",
        .hint.as_ref().map(|h| format!(": {h}")).unwrap_or_default()
    )]
    InvalidValue { field: String, hint: Option<String> },

    #[error("invalid profile override: {message}")]
    InvalidProfileOverride { message: String },

    #[error("rewrite namespace `{namespace}` would re-match its own prefix `{prefix}`")]
    InvalidRewriteRule { prefix: String, namespace: String },

    // Schema validation errors (no filesystem checks)
    #[error("schema validation failed: {message}")]
    SchemaValidation {
        message: String,
        hint: Option<String>,
    },

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
