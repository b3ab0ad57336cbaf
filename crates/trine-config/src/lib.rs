pub mod bundle;
pub mod config;
pub mod discovery;
pub mod error;
pub mod settings;
pub mod validation;

// Re-export main types
pub use bundle::*;
pub use config::*;
pub use error::*;
pub use settings::*;

// Re-export discovery and validation
pub use discovery::ConfigDiscovery;
pub use validation::{ConfigValidator, FsValidator, SchemaValidator, validate_fs, validate_schema};
