//! One scan unit: discover files, extract each, aggregate into a [`Registry`].

use std::path::{Path, PathBuf};

use envscan_parser::Extractor;

use crate::error::ScanError;
use crate::registry::Registry;
use crate::walk::{self, WalkMode};

/// Settings shared by every scan unit of a run.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Accessor namespace object (`EnvParse`).
    pub namespace: String,
    /// File extensions, without the dot, that count as sources.
    pub extensions: Vec<String>,
    pub walk_mode: WalkMode,
}

/// Runs the extraction pipeline over files and directories.
#[derive(Debug, Clone)]
pub struct Scanner {
    extractor: Extractor,
    options: ScanOptions,
}

impl Scanner {
    #[must_use]
    pub fn new(options: ScanOptions) -> Self {
        Self {
            extractor: Extractor::new(options.namespace.clone()),
            options,
        }
    }

    #[must_use]
    pub const fn options(&self) -> &ScanOptions {
        &self.options
    }

    /// Scan a single source file or a directory tree into a fresh registry.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::RootNotFound`] when `root` does not exist or
    /// cannot be read. Per-file failures are logged, never returned.
    pub fn scan_path(&self, root: &Path) -> Result<Registry, ScanError> {
        let metadata = std::fs::metadata(root).map_err(|source| ScanError::RootNotFound {
            path: root.to_path_buf(),
            source,
        })?;

        let files = if metadata.is_dir() {
            std::fs::read_dir(root).map_err(|source| ScanError::RootNotFound {
                path: root.to_path_buf(),
                source,
            })?;
            walk::discover_sources(root, self.options.walk_mode, &self.options.extensions)
        } else {
            vec![root.to_path_buf()]
        };

        tracing::debug!(root = %root.display(), files = files.len(), "scan: discovered sources");
        let mut registry = Registry::new();
        self.scan_files(&files, &mut registry);
        Ok(registry)
    }

    /// Scan the source files directly inside `dir` (no recursion).
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::Io`] when `dir` cannot be listed.
    pub fn scan_shallow(&self, dir: &Path) -> Result<Registry, ScanError> {
        let files = walk::shallow_sources(dir, &self.options.extensions)?;
        let mut registry = Registry::new();
        self.scan_files(&files, &mut registry);
        Ok(registry)
    }

    /// Extract every file in order into `registry`.
    pub fn scan_files(&self, files: &[PathBuf], registry: &mut Registry) {
        for file in files {
            self.scan_file(file, registry);
        }
    }

    /// Extract one file into `registry`, returning how many declarations it
    /// contributed. Failures are logged and contribute nothing.
    pub fn scan_file(&self, file: &Path, registry: &mut Registry) -> usize {
        match self.extractor.extract_path(file) {
            Ok(declarations) => {
                let count = declarations.len();
                for declaration in declarations {
                    if let Some(previous) = registry.put(declaration) {
                        tracing::debug!(
                            key = %previous.key,
                            previous = %previous.location.file,
                            file = %file.display(),
                            "scan: declaration overridden"
                        );
                    }
                }
                count
            }
            Err(error) => {
                tracing::warn!(file = %file.display(), %error, "scan: skipping file");
                0
            }
        }
    }
}
