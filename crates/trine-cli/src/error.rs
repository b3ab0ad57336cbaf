//! Error handling for the trine CLI.
//!
//! Domain errors from `trine-config` and `trine-target` convert into
//! [`CliError`] via `#[from]`; `main` turns the result into a miette report.

use miette::Report;
use thiserror::Error;
use trine_config::ConfigError;
use trine_target::TargetError;

pub type Result<T> = std::result::Result<T, CliError>;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Planning error: {0}")]
    Target(#[from] TargetError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convert CliError to miette Report, attaching hints where the error has one.
pub fn cli_error_to_miette(err: CliError) -> Report {
    match &err {
        CliError::Config(ConfigError::SchemaValidation {
            hint: Some(hint), ..
        })
        | CliError::Config(ConfigError::InvalidValue {
            hint: Some(hint), ..
        }) => {
            let hint = hint.clone();
            miette::miette!(help = hint, "{}", err)
        }
        CliError::Config(ConfigError::InvalidRewriteRule { .. }) => miette::miette!(
            help = "Pick a namespace that does not start with the rewrite prefix",
            "{}",
            err
        ),
        CliError::Target(TargetError::OutputCollision { .. }) => miette::miette!(
            help = "Rename one of the entries so each maps to a distinct output",
            "{}",
            err
        ),
        _ => miette::miette!("{}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn report_keeps_error_message() {
        let err = CliError::Target(TargetError::OutputCollision {
            output: PathBuf::from("dist/a.js"),
            first: PathBuf::from("src/a.ts"),
            second: PathBuf::from("src/a.tsx"),
        });
        let report = cli_error_to_miette(err);
        assert!(report.to_string().contains("dist/a.js"));
        assert!(report.help().is_some());
    }

    #[test]
    fn hint_becomes_help() {
        let err = CliError::Config(ConfigError::SchemaValidation {
            message: "bundle.entry cannot be empty".to_string(),
            hint: Some("Set 'bundle.entry'".to_string()),
        });
        let report = cli_error_to_miette(err);
        assert_eq!(
            report.help().map(|h| h.to_string()),
            Some("Set 'bundle.entry'".to_string())
        );
    }
}
