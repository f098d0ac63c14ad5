use anyhow::Context;
use envscan_config::EnvscanConfig;
use envscan_registry::{ScanOptions, Scanner, WalkMode};

use crate::cli::GlobalFlags;

/// Load layered config and apply command-line overrides on top.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<EnvscanConfig> {
    let mut config = match &flags.config {
        Some(path) => {
            let _ = dotenvy::dotenv();
            EnvscanConfig::load_from(path)
                .with_context(|| format!("failed to load config file {}", path.display()))?
        }
        None => EnvscanConfig::load_with_dotenv().context("failed to load configuration")?,
    };

    apply_flags(&mut config, flags);
    config.validate()?;
    tracing::debug!(
        namespace = %config.accessor.namespace,
        library = %config.accessor.library,
        "config loaded"
    );
    Ok(config)
}

fn apply_flags(config: &mut EnvscanConfig, flags: &GlobalFlags) {
    if let Some(namespace) = &flags.namespace {
        config.accessor.namespace.clone_from(namespace);
    }
    if let Some(library) = &flags.library {
        config.accessor.library.clone_from(library);
    }
    if flags.sort {
        config.scan.sort = true;
    }
}

/// Scanner configured for this run.
#[must_use]
pub fn scanner(config: &EnvscanConfig) -> Scanner {
    Scanner::new(ScanOptions {
        namespace: config.accessor.namespace.clone(),
        extensions: config.scan.extensions.clone(),
        walk_mode: WalkMode::from_respect_gitignore(config.scan.respect_gitignore),
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::cli::OutputFormat;

    fn flags() -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Md,
            sort: false,
            namespace: None,
            library: None,
            quiet: false,
            verbose: false,
            config: None,
        }
    }

    #[test]
    fn flags_override_config() {
        let mut config = EnvscanConfig::default();
        let flags = GlobalFlags {
            sort: true,
            namespace: Some("Env".to_string()),
            library: Some("@acme/env".to_string()),
            ..flags()
        };
        apply_flags(&mut config, &flags);

        assert_eq!(config.accessor.namespace, "Env");
        assert_eq!(config.accessor.library, "@acme/env");
        assert!(config.scan.sort);
    }

    #[test]
    fn absent_flags_keep_config() {
        let mut config = EnvscanConfig::default();
        config.scan.sort = true;
        apply_flags(&mut config, &flags());

        assert_eq!(config.accessor.namespace, "EnvParse");
        assert!(config.scan.sort);
    }

    #[test]
    fn scanner_uses_configured_namespace() {
        let mut config = EnvscanConfig::default();
        config.accessor.namespace = "Env".to_string();
        config.scan.respect_gitignore = false;

        let scanner = scanner(&config);
        assert_eq!(scanner.options().namespace, "Env");
        assert_eq!(scanner.options().walk_mode, WalkMode::Raw);
    }
}
