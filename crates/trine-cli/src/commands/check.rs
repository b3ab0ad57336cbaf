//! `trine check`: validate the configuration against the filesystem.

use std::path::Path;

use trine_config::{TrineConfig, validate_fs};

use crate::error::Result;

pub fn execute(config: &TrineConfig, root: &Path) -> Result<()> {
    validate_fs(config, root)?;

    match &config.multi {
        Some(multi) => tracing::info!(input = %multi.input_dir.display(), "configuration ok"),
        None => tracing::info!(entry = %config.bundle.entry.display(), "configuration ok"),
    }
    println!("ok");
    Ok(())
}
