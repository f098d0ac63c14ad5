use clap::Parser;
use envscan_registry::ScanError;

mod bootstrap;
mod cli;
mod commands;
mod output;

/// Exit status when the scan root or package store does not exist.
const EXIT_ROOT_NOT_FOUND: i32 = 2;

fn main() {
    if let Err(error) = run() {
        eprintln!("envscan error: {error:#}");
        std::process::exit(exit_code(&error));
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let flags = cli.global_flags();
    init_tracing(flags.quiet, flags.verbose)?;

    let config = bootstrap::load_config(&flags)?;
    commands::dispatch::dispatch(&cli.command, &config, &flags)
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("ENVSCAN_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

fn exit_code(error: &anyhow::Error) -> i32 {
    let root_missing = error.chain().any(|cause| {
        matches!(
            cause.downcast_ref::<ScanError>(),
            Some(ScanError::RootNotFound { .. })
        )
    });
    if root_missing { EXIT_ROOT_NOT_FOUND } else { 1 }
}
