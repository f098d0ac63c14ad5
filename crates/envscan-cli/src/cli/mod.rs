use std::path::PathBuf;

use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `envscan` binary.
#[derive(Debug, Parser)]
#[command(
    name = "envscan",
    version,
    about = "Catalog environment variables declared through an env accessor API"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: md, json
    #[arg(short, long, global = true, default_value = "md")]
    pub format: OutputFormat,

    /// Sort entries by variable name instead of discovery order
    #[arg(short, long, global = true)]
    pub sort: bool,

    /// Accessor namespace object (overrides `accessor.namespace`)
    #[arg(long, global = true)]
    pub namespace: Option<String>,

    /// Accessor npm package (overrides `accessor.library`)
    #[arg(long, global = true)]
    pub library: Option<String>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Explicit config file, layered above `.envscan.toml`
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            sort: self.sort,
            namespace: self.namespace.clone(),
            library: self.library.clone(),
            quiet: self.quiet,
            verbose: self.verbose,
            config: self.config.clone(),
        }
    }
}
