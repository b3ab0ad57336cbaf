use serde::{Deserialize, Serialize};

/// Artifact kind produced by one target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetFormat {
    /// ES module bundle (static linkage)
    Module,
    /// CommonJS bundle (dynamic linkage)
    Legacy,
    /// Type declarations only
    Declarations,
}

impl TargetFormat {
    /// All formats in the order a request produces them.
    pub const ALL: [TargetFormat; 3] = [Self::Module, Self::Legacy, Self::Declarations];

    /// File suffix replacing the trailing `.js` of the requested output.
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Module => ".js",
            Self::Legacy => ".cjs.js",
            Self::Declarations => ".d.ts",
        }
    }

    /// Format name understood by the bundler runtime.
    pub fn runtime_format(self) -> &'static str {
        match self {
            Self::Module => "esm",
            Self::Legacy => "cjs",
            Self::Declarations => "es",
        }
    }

    /// Whether the target emits executable code.
    pub fn emits_code(self) -> bool {
        !matches!(self, Self::Declarations)
    }
}

impl std::fmt::Display for TargetFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Module => "module",
            Self::Legacy => "legacy",
            Self::Declarations => "declarations",
        };
        f.write_str(name)
    }
}
