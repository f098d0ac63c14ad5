//! Installed-package traversal.
//!
//! Every package in the store that depends on the accessor library (or is the
//! library) becomes its own scan unit. Only the files directly inside the
//! package entry directory are scanned.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::error::ScanError;
use crate::manifest::{MANIFEST_FILE, PackageManifest};
use crate::registry::Registry;
use crate::scan::Scanner;

const UNKNOWN_VERSION: &str = "unknown";

/// Identity of one installed package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageUnit {
    pub name: String,
    pub version: String,
    pub entry_dir: PathBuf,
}

impl PackageUnit {
    /// Output heading, `name@version`.
    #[must_use]
    pub fn heading(&self) -> String {
        format!("{}@{}", self.name, self.version)
    }
}

/// Declarations found in one package.
#[derive(Debug, Clone)]
pub struct PackageReport {
    pub unit: PackageUnit,
    pub registry: Registry,
}

impl PackageReport {
    #[must_use]
    pub fn heading(&self) -> String {
        self.unit.heading()
    }
}

/// Recursive walker over a package store such as `node_modules`.
///
/// Directories are visited once each, by canonical path, so symlinked
/// workspaces cannot loop.
#[derive(Debug)]
pub struct DependencyWalker<'a> {
    scanner: &'a Scanner,
    library: String,
    visited: HashSet<PathBuf>,
}

impl<'a> DependencyWalker<'a> {
    #[must_use]
    pub fn new(scanner: &'a Scanner, library: impl Into<String>) -> Self {
        Self {
            scanner,
            library: library.into(),
            visited: HashSet::new(),
        }
    }

    /// Walk `store` and return one report per package with declarations.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::RootNotFound`] when `store` is not a readable
    /// directory. Broken packages below it are logged and skipped.
    pub fn walk(mut self, store: &Path) -> Result<Vec<PackageReport>, ScanError> {
        let subdirs = sorted_subdirs(store).map_err(|source| ScanError::RootNotFound {
            path: store.to_path_buf(),
            source,
        })?;
        self.mark_visited(store);

        let mut reports = Vec::new();
        for dir in subdirs {
            self.visit(&dir, &mut reports);
        }
        tracing::debug!(store = %store.display(), packages = reports.len(), "deps: walk complete");
        Ok(reports)
    }

    fn visit(&mut self, dir: &Path, reports: &mut Vec<PackageReport>) {
        if !self.mark_visited(dir) {
            tracing::debug!(dir = %dir.display(), "deps: already visited");
            return;
        }

        let manifest_path = dir.join(MANIFEST_FILE);
        if manifest_path.is_file() {
            match self.package_report(dir, &manifest_path) {
                Ok(Some(report)) => reports.push(report),
                Ok(None) => {}
                Err(error) => {
                    tracing::warn!(dir = %dir.display(), %error, "deps: skipping package");
                }
            }
            return;
        }

        // Scope directories (`@org/`) and nested stores have no manifest.
        match sorted_subdirs(dir) {
            Ok(subdirs) => {
                for sub in subdirs {
                    self.visit(&sub, reports);
                }
            }
            Err(error) => {
                tracing::warn!(dir = %dir.display(), %error, "deps: cannot list directory");
            }
        }
    }

    fn package_report(
        &self,
        dir: &Path,
        manifest_path: &Path,
    ) -> Result<Option<PackageReport>, ScanError> {
        let manifest = PackageManifest::from_path(manifest_path)?;
        if !manifest.declares(&self.library) {
            return Ok(None);
        }

        let unit = PackageUnit {
            name: manifest.name.clone().unwrap_or_else(|| dir_name(dir)),
            version: manifest
                .version
                .clone()
                .unwrap_or_else(|| UNKNOWN_VERSION.to_string()),
            entry_dir: manifest.entry_dir(dir),
        };

        let registry = self.scanner.scan_shallow(&unit.entry_dir)?;
        if registry.is_empty() {
            tracing::debug!(package = %unit.heading(), "deps: no declarations");
            return Ok(None);
        }
        Ok(Some(PackageReport { unit, registry }))
    }

    /// Record `dir`; false when it was already seen.
    fn mark_visited(&mut self, dir: &Path) -> bool {
        let key = dir.canonicalize().unwrap_or_else(|_| dir.to_path_buf());
        self.visited.insert(key)
    }
}

fn sorted_subdirs(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut dirs = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            dirs.push(path);
        }
    }
    dirs.sort();
    Ok(dirs)
}

fn dir_name(dir: &Path) -> String {
    dir.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
