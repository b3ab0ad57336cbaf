//! Error types for target assembly.

use std::path::PathBuf;

/// Result type for target assembly operations
pub type Result<T> = std::result::Result<T, TargetError>;

/// Error type for target assembly operations
#[derive(Debug, thiserror::Error)]
pub enum TargetError {
    #[error("Configuration error: {0}")]
    Config(#[from] trine_config::ConfigError),

    #[error("cannot read entry directory {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "entries {} and {} both produce {}",
        .first.display(),
        .second.display(),
        .output.display()
    )]
    OutputCollision {
        output: PathBuf,
        first: PathBuf,
        second: PathBuf,
    },
}
