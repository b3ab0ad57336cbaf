//! Command-line interface definition.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// trine - multi-target build plans for JavaScript bundlers
#[derive(Parser, Debug)]
#[command(
    name = "trine",
    version,
    about = "Assemble ESM, CommonJS and declaration build targets",
    long_about = "trine turns a source entry (or a directory of entries) into module, legacy and\n\
                  type-declaration targets with ordered plugin pipelines, printed as JSON for a\n\
                  bundler runtime to execute."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Config file (defaults to trine.toml or the package.json "trine" field)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Profile merged over the base config
    #[arg(short, long, global = true, value_name = "NAME")]
    pub profile: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the target configurations as JSON
    Plan(PlanArgs),

    /// Validate the configuration against the filesystem
    Check,
}

/// Arguments for the plan command
#[derive(Args, Debug, Default, Clone)]
pub struct PlanArgs {
    /// Single entry to plan
    #[arg(value_name = "ENTRY", conflicts_with = "dir")]
    pub entry: Option<PathBuf>,

    /// Plan one bundle per immediate entry of this directory
    #[arg(short, long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Output file (single entry) or output directory (with --dir)
    #[arg(short, long, value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Leave the compression step out of code pipelines
    #[arg(long)]
    pub no_minify: bool,

    /// Disable source maps
    #[arg(long)]
    pub no_sourcemap: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}
