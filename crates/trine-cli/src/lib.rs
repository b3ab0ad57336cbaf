//! trine CLI - prints multi-target build plans for a bundler runtime.
//!
//! - [`cli`] - argument definitions
//! - [`commands`] - `plan` and `check`
//! - [`config`] - layered configuration loading
//! - [`error`] - error types and diagnostic conversion
//! - [`logger`] - tracing subscriber setup

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;

pub use error::{CliError, Result};
