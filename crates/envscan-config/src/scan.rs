//! File discovery settings.

use serde::{Deserialize, Serialize};

/// Extensions scanned when none are configured.
pub const DEFAULT_EXTENSIONS: &[&str] = &["ts", "tsx", "js", "mjs", "cjs"];

fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(ToString::to_string).collect()
}

const fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ScanConfig {
    /// Source file extensions, without the leading dot.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Honor `.gitignore` and `.envscanignore` while walking.
    #[serde(default = "default_true")]
    pub respect_gitignore: bool,

    /// Emit entries sorted by key instead of discovery order.
    #[serde(default)]
    pub sort: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            respect_gitignore: true,
            sort: false,
        }
    }
}
