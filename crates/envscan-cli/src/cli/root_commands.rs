use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Scan a source file or directory for accessor declarations.
    Scan(ScanArgs),
    /// Report declarations made by installed packages that use the accessor library.
    Deps(DepsArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ScanArgs {
    /// File or directory to scan.
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Also report installed packages from the configured package store.
    #[arg(long)]
    pub with_deps: bool,
}

#[derive(Clone, Debug, Args)]
pub struct DepsArgs {
    /// Package store to walk (defaults to `deps.store`, usually `node_modules`).
    pub store: Option<PathBuf>,
}
