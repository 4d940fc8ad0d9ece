//! Application configuration
//!
//! Configuration loaded from `.todo-goals.toml`, searched in the current
//! directory first, then in the home directory.

use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

const CONFIG_FILE: &str = ".todo-goals.toml";

/// Application configuration loaded from .todo-goals.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Log level used when RUST_LOG is not set (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Write logs to a timestamped file in this directory instead of stderr
    #[serde(default)]
    pub log_dir: Option<PathBuf>,

    /// Pretty-print the state JSON
    #[serde(default)]
    pub pretty: bool,

    /// Print the state after every dispatch
    #[serde(default = "default_print_state")]
    pub print_state: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_print_state() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_dir: None,
            pretty: false,
            print_state: default_print_state(),
        }
    }
}

/// Where the loaded config came from
///
/// Config is read before the logger exists, so the outcome is handed back
/// and logged with [`ConfigSource::log`] once logging is up.
#[derive(Debug)]
pub enum ConfigSource {
    /// Parsed from this file
    File(PathBuf),
    /// No config file found
    Defaults,
    /// The first file found failed to load; defaults are used instead
    Invalid(Error),
}

impl ConfigSource {
    /// Report the outcome of config loading
    pub fn log(&self) {
        match self {
            Self::File(path) => log::info!("Loaded app config from {}", path.display()),
            Self::Defaults => log::debug!("Using default app config"),
            Self::Invalid(e) => match std::error::Error::source(e) {
                Some(cause) => log::warn!("{}: {}, using default app config", e, cause),
                None => log::warn!("{}, using default app config", e),
            },
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> (Self, ConfigSource) {
        let mut candidates = vec![PathBuf::from(CONFIG_FILE)];
        candidates.extend(home_config_path());
        Self::load_first(candidates)
    }

    /// Load the first readable file of `candidates`.
    ///
    /// A file that fails to parse yields the defaults together with
    /// [`ConfigSource::Invalid`].
    pub fn load_first(candidates: impl IntoIterator<Item = PathBuf>) -> (Self, ConfigSource) {
        for path in candidates {
            let Ok(content) = std::fs::read_to_string(&path) else {
                continue;
            };
            return match Self::parse(&path, &content) {
                Ok(config) => (config, ConfigSource::File(path)),
                Err(e) => (Self::default(), ConfigSource::Invalid(e)),
            };
        }

        (Self::default(), ConfigSource::Defaults)
    }

    /// Load an explicitly requested config file
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(path, &content)
    }

    fn parse(path: &Path, content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// ~/.todo-goals.toml if HOME is set
fn home_config_path() -> Option<PathBuf> {
    env::var_os("HOME").map(|home| PathBuf::from(home).join(CONFIG_FILE))
}
