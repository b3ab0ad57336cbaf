use std::path::PathBuf;

// Helper defaults
pub(crate) fn default_true() -> bool {
    true
}

pub(crate) fn default_entry() -> PathBuf {
    PathBuf::from("src/index.ts")
}

pub(crate) fn default_output() -> PathBuf {
    PathBuf::from("dist/index.js")
}

pub(crate) fn default_input_dir() -> PathBuf {
    PathBuf::from("src")
}

pub(crate) fn default_output_dir() -> PathBuf {
    PathBuf::from("dist")
}

pub(crate) fn default_rewrite_prefix() -> String {
    "shared".to_string()
}

pub(crate) fn default_rewrite_namespace() -> String {
    "@react-spring/".to_string()
}
