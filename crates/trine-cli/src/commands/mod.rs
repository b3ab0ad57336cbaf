//! Command implementations.

pub mod check;
pub mod plan;

use crate::cli::{Cli, Command};
use crate::config::load_config;
use crate::error::Result;
use crate::logger;

/// Install logging, load configuration and run the selected command.
pub fn execute(cli: Cli) -> Result<()> {
    let logger = logger::init_logger(cli.verbose, cli.quiet, cli.no_color);

    let root = std::env::current_dir()?;
    let config = load_config(&root, cli.config.as_deref(), cli.profile.as_deref())?;
    logger.apply_default_level(config.settings.log_level.as_deref());

    match cli.command {
        Command::Plan(args) => plan::execute(config, &args),
        Command::Check => check::execute(&config, &root),
    }
}
