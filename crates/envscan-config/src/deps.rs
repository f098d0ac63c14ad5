//! Dependency traversal settings.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_store() -> PathBuf {
    PathBuf::from("node_modules")
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DepsConfig {
    /// Package store walked by `deps` and `scan --with-deps`, relative to the
    /// scan root when not absolute.
    #[serde(default = "default_store")]
    pub store: PathBuf,
}

impl Default for DepsConfig {
    fn default() -> Self {
        Self {
            store: default_store(),
        }
    }
}
