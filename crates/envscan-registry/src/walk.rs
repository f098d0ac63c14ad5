//! Source file discovery.
//!
//! Uses the `ignore` crate for gitignore-aware directory walking. Entries are
//! sorted by file name in every directory, so discovery order (and therefore
//! last-write-wins resolution in the registry) is reproducible across
//! platforms.
//!
//! ## Walking modes
//!
//! - `Project`: respects `.gitignore` and `.envscanignore`.
//! - `Raw`: disables the standard filters and walks every file, including
//!   hidden files and ignored directories.
//!
//! `node_modules/` is skipped in both modes: installed packages are separate
//! scan units handled by the dependency walker.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

/// Custom ignore file honored in `Project` mode.
pub const IGNORE_FILE: &str = ".envscanignore";

const ALWAYS_SKIPPED_DIRS: &[&str] = &["node_modules", ".git"];

/// Walking mode for the file walker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkMode {
    Project,
    Raw,
}

impl WalkMode {
    #[must_use]
    pub const fn from_respect_gitignore(respect: bool) -> Self {
        if respect { Self::Project } else { Self::Raw }
    }
}

/// Build a sorted file walker over `root`.
#[must_use]
pub fn build_walker(root: &Path, mode: WalkMode) -> ignore::Walk {
    let mut builder = WalkBuilder::new(root);
    builder.hidden(false);
    builder.sort_by_file_name(|a, b| a.cmp(b));

    match mode {
        WalkMode::Project => {
            builder.add_custom_ignore_filename(IGNORE_FILE);
        }
        WalkMode::Raw => {
            builder.standard_filters(false);
        }
    }

    builder.filter_entry(|entry| {
        let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
        let name = entry.file_name().to_string_lossy();
        !(is_dir && ALWAYS_SKIPPED_DIRS.contains(&name.as_ref()))
    });

    builder.build()
}

/// Whether `path` is a source file with one of `extensions`.
///
/// Type declaration files (`.d.ts`, `.d.mts`, `.d.cts`) never match.
#[must_use]
pub fn has_source_extension(path: &Path, extensions: &[String]) -> bool {
    let Some(name) = path.file_name().map(|n| n.to_string_lossy()) else {
        return false;
    };
    if [".d.ts", ".d.mts", ".d.cts"]
        .iter()
        .any(|suffix| name.ends_with(suffix))
    {
        return false;
    }
    path.extension()
        .map(|ext| ext.to_string_lossy())
        .is_some_and(|ext| extensions.iter().any(|wanted| wanted.as_str() == ext))
}

/// Walk `root` and collect source files in discovery order.
///
/// Unreadable entries are logged and skipped.
#[must_use]
pub fn discover_sources(root: &Path, mode: WalkMode, extensions: &[String]) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for entry in build_walker(root, mode) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(error) => {
                tracing::warn!(root = %root.display(), %error, "walk: skipping unreadable entry");
                continue;
            }
        };
        if entry.file_type().is_some_and(|ft| ft.is_file())
            && has_source_extension(entry.path(), extensions)
        {
            files.push(entry.into_path());
        }
    }
    files
}

/// Source files directly inside `dir`, sorted by name. Does not recurse.
///
/// # Errors
///
/// Returns the underlying IO error when `dir` cannot be listed.
pub fn shallow_sources(dir: &Path, extensions: &[String]) -> std::io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && has_source_extension(&path, extensions) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
