//! trine CLI entry point: argument parsing and command dispatch.

use clap::Parser;
use trine_cli::{cli, commands, error};

fn main() -> miette::Result<()> {
    let args = cli::Cli::parse();
    commands::execute(args).map_err(error::cli_error_to_miette)
}
