//! Selects the targets for a request and assembles each one.

use trine_config::{BuildRequest, MultiBundleOptions, PathRewriteRule, TrineConfig};

use crate::error::Result;
use crate::external::ExternalPredicate;
use crate::format::TargetFormat;
use crate::pipeline::{code_pipeline, declaration_pipeline};
use crate::target::{OutputOptions, TargetConfig, derive_output};
use crate::transform::LanguageTransform;

/// Builds target configurations from requests.
///
/// The planner owns the import-path rewrite rule and the module boundary; both
/// are cloned into every target so all artifacts of a request agree on what is
/// bundled and what stays a dependency.
#[derive(Debug, Clone, Default)]
pub struct TargetPlanner {
    rewrite: PathRewriteRule,
    external: ExternalPredicate,
}

impl TargetPlanner {
    pub fn new(rewrite: PathRewriteRule) -> Self {
        Self {
            rewrite,
            external: ExternalPredicate::native(),
        }
    }

    pub fn from_config(config: &TrineConfig) -> Self {
        Self::new(config.rewrite.clone())
    }

    pub fn with_external(mut self, external: ExternalPredicate) -> Self {
        self.external = external;
        self
    }

    /// Module, legacy and declaration targets for one request, in that order.
    pub fn bundle(&self, request: &BuildRequest) -> [TargetConfig; 3] {
        TargetFormat::ALL.map(|format| self.target(request, format))
    }

    /// Plan the whole config: the directory build when `multi` is set,
    /// otherwise the single-entry build.
    pub fn plan(&self, config: &TrineConfig) -> Result<Vec<TargetConfig>> {
        match &config.multi {
            Some(multi) => self.multi_bundle(multi),
            None => Ok(self.bundle(&config.bundle).into()),
        }
    }

    pub fn target(&self, request: &BuildRequest, format: TargetFormat) -> TargetConfig {
        let plugins = match format {
            TargetFormat::Module => code_pipeline(&LanguageTransform::module(), request.minify),
            TargetFormat::Legacy => code_pipeline(&LanguageTransform::legacy(), request.minify),
            TargetFormat::Declarations => declaration_pipeline(),
        };

        let target = TargetConfig {
            format,
            input: request.entry.clone(),
            output: OutputOptions {
                file: derive_output(&request.output, format),
                format: format.runtime_format().to_string(),
                sourcemap: format.emits_code() && request.sourcemap,
                paths: self.rewrite.clone(),
            },
            external: self.external.clone(),
            plugins,
        };

        tracing::debug!(
            %format,
            input = %target.input.display(),
            output = %target.output.file.display(),
            plugins = target.plugins.len(),
            "assembled target"
        );

        target
    }
}

/// Targets for one request using the default rewrite rule and host boundary.
pub fn bundle(request: &BuildRequest) -> [TargetConfig; 3] {
    TargetPlanner::default().bundle(request)
}

/// Targets for every entry of a directory using the default planner.
pub fn multi_bundle(options: &MultiBundleOptions) -> Result<Vec<TargetConfig>> {
    TargetPlanner::default().multi_bundle(options)
}
