use std::borrow::Cow;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use trine_config::PathRewriteRule;

use crate::external::ExternalPredicate;
use crate::format::TargetFormat;
use crate::plugin::{PluginRole, PluginSpec};

/// Output descriptor of a target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputOptions {
    pub file: PathBuf,
    /// Runtime format name (`esm`, `cjs` or `es`)
    pub format: String,
    pub sourcemap: bool,
    /// Applied to external import paths when the artifact is written
    pub paths: PathRewriteRule,
}

/// Everything the bundler runtime needs to produce one artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetConfig {
    pub format: TargetFormat,
    pub input: PathBuf,
    pub output: OutputOptions,
    pub external: ExternalPredicate,
    pub plugins: Vec<PluginSpec>,
}

impl TargetConfig {
    pub fn output_path(&self) -> &Path {
        &self.output.file
    }

    pub fn is_external(&self, id: &str) -> bool {
        self.external.is_external(id)
    }

    pub fn rewrite_path<'a>(&self, path: &'a str) -> Cow<'a, str> {
        self.output.paths.apply(path)
    }

    pub fn plugin(&self, role: PluginRole) -> Option<&PluginSpec> {
        self.plugins.iter().find(|plugin| plugin.role == role)
    }

    pub fn has_plugin(&self, role: PluginRole) -> bool {
        self.plugin(role).is_some()
    }
}

/// Output file for `format`, derived from the module-format output.
///
/// A trailing `.js` is replaced by the format suffix; any other name gets the
/// suffix appended so the three outputs never coincide.
/// Works on `OsStr`, so names that are not valid UTF-8 keep their bytes.
pub(crate) fn derive_output(output: &Path, format: TargetFormat) -> PathBuf {
    let stem = if output.extension() == Some(OsStr::new("js")) {
        output.file_stem()
    } else {
        output.file_name()
    };

    let mut name = stem.map(OsStr::to_os_string).unwrap_or_default();
    name.push(format.suffix());
    output.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_trailing_js() {
        let output = Path::new("dist/index.js");
        assert_eq!(
            derive_output(output, TargetFormat::Module),
            PathBuf::from("dist/index.js")
        );
        assert_eq!(
            derive_output(output, TargetFormat::Legacy),
            PathBuf::from("dist/index.cjs.js")
        );
        assert_eq!(
            derive_output(output, TargetFormat::Declarations),
            PathBuf::from("dist/index.d.ts")
        );
    }

    #[test]
    fn only_the_final_js_is_replaced() {
        assert_eq!(
            derive_output(Path::new("dist/web.js/index.js"), TargetFormat::Legacy),
            PathBuf::from("dist/web.js/index.cjs.js")
        );
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_names_keep_their_bytes() {
        use std::os::unix::ffi::OsStrExt;

        let output = Path::new("dist").join(OsStr::from_bytes(b"spr\xffing.js"));
        assert_eq!(
            derive_output(&output, TargetFormat::Legacy).file_name(),
            Some(OsStr::from_bytes(b"spr\xffing.cjs.js"))
        );
        assert_eq!(
            derive_output(&output, TargetFormat::Declarations).file_name(),
            Some(OsStr::from_bytes(b"spr\xffing.d.ts"))
        );
    }

    #[test]
    fn appends_suffix_without_js_extension() {
        let output = Path::new("dist/animated");
        assert_eq!(
            derive_output(output, TargetFormat::Module),
            PathBuf::from("dist/animated.js")
        );
        assert_eq!(
            derive_output(output, TargetFormat::Legacy),
            PathBuf::from("dist/animated.cjs.js")
        );
    }
}
