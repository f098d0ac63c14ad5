use std::path::PathBuf;

use envscan_config::EnvscanConfig;
use envscan_registry::DependencyWalker;

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::DepsArgs;
use crate::output::{self, Layout, Section};

/// Handle `envscan deps`.
pub fn handle(args: &DepsArgs, config: &EnvscanConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let store: PathBuf = args.store.clone().unwrap_or_else(|| config.deps.store.clone());
    let scanner = bootstrap::scanner(config);
    let reports = DependencyWalker::new(&scanner, config.accessor.library.as_str()).walk(&store)?;
    tracing::info!(store = %store.display(), packages = reports.len(), "dependency walk complete");

    let headings: Vec<String> = reports.iter().map(|report| report.heading()).collect();
    let sections: Vec<Section<'_>> = reports
        .iter()
        .zip(&headings)
        .map(|(report, heading)| Section {
            heading: heading.as_str(),
            registry: &report.registry,
        })
        .collect();

    output::output(&sections, Layout::Keyed, flags.format, config.scan.sort)
}
