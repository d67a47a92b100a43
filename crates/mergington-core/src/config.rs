//! Configuration loading and typed config structures for the sign-up board.
//!
//! Configuration lives in `mergington-config.yaml` next to the binary's
//! working directory. Every section is optional; a missing file yields
//! [`BoardConfig::default`], which serves the built-in catalog on
//! `0.0.0.0:8000`.
//!
//! ```yaml
//! server:
//!   host: "0.0.0.0"
//!   port: 8000
//!   static_dir: "static"
//! logging:
//!   level: "info"
//!   format: "pretty"
//! activities:
//!   "Chess Club":
//!     description: "Learn strategies and compete in chess tournaments"
//!     schedule: "Fridays, 3:30 PM - 5:00 PM"
//!     max_participants: 12
//!     participants: ["michael@mergington.edu"]
//! ```

use std::path::{Path, PathBuf};

use mergington_types::ActivityCatalog;
use serde::Deserialize;

use crate::seed::{self, SeedError};

/// Config file read when `MERGINGTON_CONFIG` is not set.
pub const DEFAULT_CONFIG_PATH: &str = "mergington-config.yaml";

/// Environment variable naming an alternative config file.
pub const CONFIG_PATH_ENV: &str = "MERGINGTON_CONFIG";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// An environment override could not be parsed.
    #[error("invalid value {value:?} for {var}: {source}")]
    InvalidOverride {
        /// The environment variable.
        var: &'static str,
        /// The rejected value.
        value: String,
        /// The underlying parse error.
        source: std::num::ParseIntError,
    },

    /// The `activities` section describes an invalid starting state.
    #[error("invalid seed catalog: {source}")]
    InvalidSeed {
        /// The validation failure.
        #[from]
        source: SeedError,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level board configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BoardConfig {
    /// HTTP listener and static asset settings.
    #[serde(default)]
    pub server: HttpConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Seed catalog. `None` means the built-in catalog.
    #[serde(default)]
    pub activities: Option<ActivityCatalog>,
}

impl BoardConfig {
    /// Resolve the config path from `MERGINGTON_CONFIG`, falling back to
    /// [`DEFAULT_CONFIG_PATH`].
    pub fn path_from_env() -> PathBuf {
        std::env::var_os(CONFIG_PATH_ENV)
            .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from)
    }

    /// Load configuration from `path`, apply environment overrides, and
    /// validate the seed catalog.
    ///
    /// A missing file is not an error; the defaults are used instead.
    ///
    /// Environment overrides:
    /// - `MERGINGTON_HOST` overrides `server.host`
    /// - `MERGINGTON_PORT` overrides `server.port`
    /// - `MERGINGTON_STATIC_DIR` overrides `server.static_dir`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file exists but cannot be read,
    /// [`ConfigError::Yaml`] if it is not valid YAML,
    /// [`ConfigError::InvalidOverride`] for an unparseable port, or
    /// [`ConfigError::InvalidSeed`] if the catalog is inconsistent.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut config = match std::fs::read_to_string(path) {
            Ok(contents) => serde_yml::from_str(&contents)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(e) => return Err(e.into()),
        };
        config.server.apply_overrides(|var| std::env::var(var).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a YAML string and validate it.
    ///
    /// No environment overrides are applied.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML, or
    /// [`ConfigError::InvalidSeed`] if the catalog is inconsistent.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configured seed catalog, if any.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidSeed`] on the first inconsistency.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(catalog) = &self.activities {
            seed::validate_catalog(catalog)?;
        }
        Ok(())
    }

    /// The catalog the store should start with.
    pub fn seed_catalog(&self) -> ActivityCatalog {
        self.activities.clone().unwrap_or_else(seed::default_catalog)
    }
}

/// HTTP listener configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HttpConfig {
    /// Address to bind (e.g. `0.0.0.0`).
    #[serde(default = "default_host")]
    pub host: String,

    /// TCP port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory served under `/static`.
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,
}

impl HttpConfig {
    /// Override listener settings from `lookup`, which maps an environment
    /// variable name to its value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidOverride`] if `MERGINGTON_PORT` is not
    /// a valid port number.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        if let Some(val) = lookup("MERGINGTON_HOST") {
            self.host = val;
        }
        if let Some(val) = lookup("MERGINGTON_PORT") {
            self.port = val.parse().map_err(|source| ConfigError::InvalidOverride {
                var: "MERGINGTON_PORT",
                value: val.clone(),
                source,
            })?;
        }
        if let Some(val) = lookup("MERGINGTON_STATIC_DIR") {
            self.static_dir = PathBuf::from(val);
        }
        Ok(())
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format.
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Default value functions (serde default requires named functions)
// ---------------------------------------------------------------------------

fn default_host() -> String {
    "0.0.0.0".to_owned()
}

const fn default_port() -> u16 {
    8000
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("static")
}

fn default_log_level() -> String {
    "info".to_owned()
}
