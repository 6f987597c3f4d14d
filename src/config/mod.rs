//! Configuration file support for the Vela CLI
//!
//! The config file is the lowest-precedence layer: flags and environment
//! variables (handled by clap) always win over values found here.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Default log level when nothing else is configured
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Server connection settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Logging settings
    #[serde(default)]
    pub log: LogConfig,

    /// Default organization
    #[serde(default)]
    pub org: Option<String>,

    /// Default repository
    #[serde(default)]
    pub repo: Option<String>,

    /// File this configuration was read from, if any
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

/// Server connection settings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiConfig {
    /// Vela server address
    #[serde(default)]
    pub addr: Option<String>,

    /// Bearer token used to authenticate
    #[serde(default)]
    pub token: Option<String>,
}

/// Logging settings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LogConfig {
    /// Log level filter (error, warn, info, debug, trace)
    #[serde(default)]
    pub level: Option<String>,
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".vela").join("config.yml"))
    }

    /// Load configuration from a path, or from the default location.
    ///
    /// A missing file yields an empty configuration.
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        match path {
            Some(p) => Self::load_from(Path::new(p)),
            None => Self::load_from(&Self::default_path()?),
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        if contents.trim().is_empty() {
            return Ok(Self {
                source: Some(path.to_path_buf()),
                ..Self::default()
            });
        }

        let mut config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;
        config.source = Some(path.to_path_buf());

        Ok(config)
    }

    /// Log level from the file, falling back to the built-in default
    pub fn log_level(&self) -> &str {
        self.log.level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }
}
