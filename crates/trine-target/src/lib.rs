//! # trine-target
//!
//! Turns build requests into bundler target configurations.
//!
//! Every request becomes three independent targets: an ES module bundle, a
//! CommonJS bundle and a type-declaration bundle. Each target carries an
//! ordered plugin pipeline and the module boundary shared by all three. The
//! targets are plain data for an external bundler runtime to execute.
//!
//! ```
//! use trine_config::BuildRequest;
//! use trine_target::{TargetFormat, TargetPlanner};
//!
//! let request = BuildRequest::new("src/index.ts", "dist/index.js");
//! let targets = TargetPlanner::default().bundle(&request);
//! let formats: Vec<_> = targets.iter().map(|t| t.format).collect();
//! assert_eq!(
//!     formats,
//!     [TargetFormat::Module, TargetFormat::Legacy, TargetFormat::Declarations]
//! );
//! ```

pub mod error;
pub mod expand;
pub mod external;
pub mod format;
pub mod pipeline;
pub mod planner;
pub mod plugin;
pub mod target;
pub mod transform;

pub use error::{Result, TargetError};
pub use expand::output_name;
pub use external::ExternalPredicate;
pub use format::TargetFormat;
pub use pipeline::{RESOLVE_EXTENSIONS, code_pipeline, declaration_pipeline};
pub use planner::{TargetPlanner, bundle, multi_bundle};
pub use plugin::{PluginRole, PluginSpec};
pub use target::{OutputOptions, TargetConfig};
pub use transform::{LanguageTransform, Linkage, MODERN_BROWSERS};
