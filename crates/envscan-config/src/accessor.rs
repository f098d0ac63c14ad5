//! Which accessor API the scanner recognizes.

use serde::{Deserialize, Serialize};

fn default_namespace() -> String {
    "EnvParse".to_string()
}

fn default_library() -> String {
    "env-parse".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AccessorConfig {
    /// Object the accessor methods hang off (`EnvParse.envInt(...)`).
    #[serde(default = "default_namespace")]
    pub namespace: String,

    /// npm package name that provides the accessor. Packages depending on it
    /// are scanned by `deps`.
    #[serde(default = "default_library")]
    pub library: String,
}

impl Default for AccessorConfig {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
            library: default_library(),
        }
    }
}
