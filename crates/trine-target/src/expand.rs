//! One bundle per entry of a directory.

use std::collections::HashMap;
use std::path::PathBuf;

use trine_config::MultiBundleOptions;

use crate::error::{Result, TargetError};
use crate::planner::TargetPlanner;
use crate::target::TargetConfig;

/// Source suffixes replaced by `.js` when naming outputs.
const SOURCE_SUFFIXES: [&str; 4] = [".tsx", ".ts", ".jsx", ".js"];

/// Output file name for a directory entry.
///
/// ```
/// use trine_target::output_name;
///
/// assert_eq!(output_name("index.ts"), "index.js");
/// assert_eq!(output_name("Spring.tsx"), "Spring.js");
/// assert_eq!(output_name("legacy.js"), "legacy.js");
/// assert_eq!(output_name("animated"), "animated.js");
/// ```
pub fn output_name(file_name: &str) -> String {
    let stem = SOURCE_SUFFIXES
        .iter()
        .find_map(|suffix| file_name.strip_suffix(suffix))
        .unwrap_or(file_name);
    format!("{stem}.js")
}

impl TargetPlanner {
    /// Targets for every immediate entry of `options.input_dir`.
    ///
    /// Entries are visited in file-name order and are not recursed into. Two
    /// entries whose targets would write the same file, in any format, are an
    /// error.
    pub fn multi_bundle(&self, options: &MultiBundleOptions) -> Result<Vec<TargetConfig>> {
        let input_dir = options.input_dir();
        let read_err = |source| TargetError::ReadDir {
            path: input_dir.to_path_buf(),
            source,
        };

        let mut names = Vec::new();
        for entry in std::fs::read_dir(input_dir).map_err(read_err)? {
            names.push(entry.map_err(read_err)?.file_name());
        }
        names.sort();

        // Output file of every planned target -> entry that produced it.
        let mut seen: HashMap<PathBuf, PathBuf> = HashMap::new();
        let mut targets = Vec::with_capacity(names.len() * 3);

        for name in names {
            let Some(name) = name.to_str() else {
                tracing::warn!(entry = ?name, "skipping entry with non UTF-8 name");
                continue;
            };

            let output = output_name(name);
            let request = options.request(name, &output);
            let planned = self.bundle(&request);

            for target in &planned {
                let file = target.output_path().to_path_buf();
                if let Some(first) = seen.insert(file.clone(), request.entry.clone()) {
                    return Err(TargetError::OutputCollision {
                        output: file,
                        first,
                        second: request.entry,
                    });
                }
            }

            targets.extend(planned);
        }

        tracing::info!(
            input = %input_dir.display(),
            bundles = targets.len() / 3,
            "expanded entry directory"
        );

        Ok(targets)
    }
}
