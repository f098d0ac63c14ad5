pub mod deps;
pub mod dispatch;
pub mod scan;

use std::path::{Path, PathBuf};

/// Resolve the package store against the scan root unless it is absolute.
#[must_use]
pub fn resolve_store(root: &Path, store: &Path) -> PathBuf {
    if store.is_absolute() {
        return store.to_path_buf();
    }
    let base = if root.is_dir() {
        root
    } else {
        root.parent().unwrap_or(root)
    };
    base.join(store)
}
