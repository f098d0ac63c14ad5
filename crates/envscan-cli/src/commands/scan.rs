use envscan_config::EnvscanConfig;
use envscan_registry::DependencyWalker;

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::ScanArgs;
use crate::commands::resolve_store;
use crate::output::{self, Layout, ROOT_HEADING, Section};

/// Handle `envscan scan`.
pub fn handle(args: &ScanArgs, config: &EnvscanConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let scanner = bootstrap::scanner(config);
    let registry = scanner.scan_path(&args.path)?;
    tracing::info!(path = %args.path.display(), declarations = registry.len(), "scan complete");

    if !args.with_deps {
        let sections = [Section {
            heading: ROOT_HEADING,
            registry: &registry,
        }];
        return output::output(&sections, Layout::Single, flags.format, config.scan.sort);
    }

    let store = resolve_store(&args.path, &config.deps.store);
    let reports = if store.is_dir() {
        DependencyWalker::new(&scanner, config.accessor.library.as_str()).walk(&store)?
    } else {
        tracing::warn!(store = %store.display(), "package store not found; skipping dependencies");
        Vec::new()
    };

    let headings: Vec<String> = reports.iter().map(|report| report.heading()).collect();
    let mut sections = Vec::with_capacity(reports.len() + 1);
    sections.push(Section {
        heading: ROOT_HEADING,
        registry: &registry,
    });
    sections.extend(reports.iter().zip(&headings).map(|(report, heading)| Section {
        heading: heading.as_str(),
        registry: &report.registry,
    }));

    output::output(&sections, Layout::Keyed, flags.format, config.scan.sort)
}
