//! npm `package.json` manifests, as far as dependency traversal needs them.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ScanError;

/// Manifest file name looked up in every package directory.
pub const MANIFEST_FILE: &str = "package.json";

/// Entry point npm assumes when `main` is absent.
const DEFAULT_MAIN: &str = "index.js";

/// The subset of `package.json` the dependency walker reads.
///
/// Version constraints are kept as raw JSON; only key presence matters.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageManifest {
    pub name: Option<String>,
    pub version: Option<String>,
    pub main: Option<String>,
    pub dependencies: Option<BTreeMap<String, serde_json::Value>>,
    pub peer_dependencies: Option<BTreeMap<String, serde_json::Value>>,
}

impl PackageManifest {
    /// Read and parse a manifest file.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::ManifestIo`] or [`ScanError::ManifestParse`].
    pub fn from_path(path: &Path) -> Result<Self, ScanError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ScanError::ManifestIo {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ScanError::ManifestParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Whether this package is `library` itself or depends on it directly
    /// (`dependencies` or `peerDependencies`).
    #[must_use]
    pub fn declares(&self, library: &str) -> bool {
        self.name.as_deref() == Some(library)
            || [&self.dependencies, &self.peer_dependencies]
                .into_iter()
                .flatten()
                .any(|deps| deps.contains_key(library))
    }

    /// Directory holding the package entry point.
    ///
    /// `main` may name a file (its parent directory is used) or a directory.
    #[must_use]
    pub fn entry_dir(&self, package_dir: &Path) -> PathBuf {
        let main = self.main.as_deref().unwrap_or(DEFAULT_MAIN);
        let entry = package_dir.join(main);
        if entry.is_dir() {
            return entry;
        }
        entry
            .parent()
            .map_or_else(|| package_dir.to_path_buf(), Path::to_path_buf)
    }
}
