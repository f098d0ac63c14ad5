//! # envscan-config
//!
//! Layered configuration loading for envscan using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`ENVSCAN_*` prefix, `__` as separator)
//! 2. An explicit file passed with `--config`
//! 3. Project-level `.envscan.toml`
//! 4. User-level `~/.config/envscan/config.toml`
//! 5. Built-in defaults
//!
//! Command-line flags are applied on top by the binary.
//!
//! # Environment Variable Mapping
//!
//! Figment maps `ENVSCAN_ACCESSOR__NAMESPACE` -> `accessor.namespace`,
//! `ENVSCAN_SCAN__SORT` -> `scan.sort`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use envscan_config::EnvscanConfig;
//!
//! let config = EnvscanConfig::load_with_dotenv().expect("config");
//! config.validate().expect("valid config");
//! println!("namespace: {}", config.accessor.namespace);
//! ```

mod accessor;
mod deps;
mod error;
mod scan;

pub use accessor::AccessorConfig;
pub use deps::DepsConfig;
pub use error::ConfigError;
pub use scan::{DEFAULT_EXTENSIONS, ScanConfig};

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

/// Project-local config file, looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = ".envscan.toml";

/// Prefix for environment variable overrides.
pub const ENV_PREFIX: &str = "ENVSCAN_";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct EnvscanConfig {
    #[serde(default)]
    pub accessor: AccessorConfig,
    #[serde(default)]
    pub scan: ScanConfig,
    #[serde(default)]
    pub deps: DepsConfig,
}

impl EnvscanConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] when a source is malformed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with an explicit config file layered above the
    /// project file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when `path` does not exist and
    /// [`ConfigError::Figment`] when a source is malformed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.is_file() {
            return Err(ConfigError::invalid(
                "config",
                &format!("file '{}' does not exist", path.display()),
            ));
        }
        Self::figment_with(Some(path))
            .extract()
            .map_err(ConfigError::from)
    }

    /// Load `.env` from the working directory, then [`Self::load`].
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    #[must_use]
    pub fn figment() -> Figment {
        Self::figment_with(None)
    }

    /// Provider chain with an optional explicit file above the project file.
    #[must_use]
    pub fn figment_with(explicit: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(PROJECT_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        if let Some(path) = explicit {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Reject values the scanner cannot work with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.accessor.namespace.trim().is_empty() {
            return Err(ConfigError::invalid("accessor.namespace", "must not be empty"));
        }
        if self.accessor.library.trim().is_empty() {
            return Err(ConfigError::invalid("accessor.library", "must not be empty"));
        }
        if self.scan.extensions.is_empty() {
            return Err(ConfigError::invalid(
                "scan.extensions",
                "at least one extension is required",
            ));
        }
        if let Some(bad) = self
            .scan
            .extensions
            .iter()
            .find(|ext| ext.is_empty() || ext.starts_with('.'))
        {
            return Err(ConfigError::invalid(
                "scan.extensions",
                &format!("'{bad}' must be a bare extension such as 'ts'"),
            ));
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("envscan").join("config.toml"))
    }
}
