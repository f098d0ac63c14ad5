use std::path::PathBuf;

use clap::ValueEnum;

/// Report format written to stdout.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Markdown tables, one section per scan unit.
    Md,
    /// JSON map keyed by variable name.
    Json,
}

/// Global flags available before or after subcommands.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    pub sort: bool,
    pub namespace: Option<String>,
    pub library: Option<String>,
    pub quiet: bool,
    pub verbose: bool,
    pub config: Option<PathBuf>,
}
