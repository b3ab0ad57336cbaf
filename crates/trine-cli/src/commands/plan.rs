//! `trine plan`: print the target configurations as JSON.

use std::io::Write;

use trine_config::{TrineConfig, validate_schema};
use trine_target::{TargetConfig, TargetPlanner};

use crate::cli::PlanArgs;
use crate::error::Result;

pub fn execute(mut config: TrineConfig, args: &PlanArgs) -> Result<()> {
    apply_overrides(&mut config, args);
    let targets = plan(&config)?;

    let json = if args.pretty {
        serde_json::to_string_pretty(&targets)?
    } else {
        serde_json::to_string(&targets)?
    };

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{json}")?;
    Ok(())
}

pub fn plan(config: &TrineConfig) -> Result<Vec<TargetConfig>> {
    validate_schema(config)?;
    let targets = TargetPlanner::from_config(config).plan(config)?;
    tracing::info!(targets = targets.len(), "planned build targets");
    Ok(targets)
}

/// Fold command-line flags into the loaded config.
///
/// `--dir` switches to a directory build and an explicit entry switches to a
/// single-entry build; `--out` applies to whichever build is active.
pub fn apply_overrides(config: &mut TrineConfig, args: &PlanArgs) {
    if let Some(dir) = &args.dir {
        let mut multi = config.multi.take().unwrap_or_default();
        multi.input_dir = dir.clone();
        config.multi = Some(multi);
    } else if let Some(entry) = &args.entry {
        config.multi = None;
        config.bundle.entry = entry.clone();
    }

    if let Some(out) = &args.out {
        match &mut config.multi {
            Some(multi) => multi.output_dir = out.clone(),
            None => config.bundle.output = out.clone(),
        }
    }

    if args.no_minify {
        config.bundle.minify = false;
        config.multi.iter_mut().for_each(|multi| multi.minify = false);
    }

    if args.no_sourcemap {
        config.bundle.sourcemap = false;
        config.multi.iter_mut().for_each(|multi| multi.sourcemap = false);
    }
}
