use envscan_config::EnvscanConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(
    command: &Commands,
    config: &EnvscanConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Scan(args) => commands::scan::handle(args, config, flags),
        Commands::Deps(args) => commands::deps::handle(args, config, flags),
    }
}
