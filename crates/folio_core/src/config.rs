//! Runtime configuration for hosts embedding the core.
//!
//! # Responsibility
//! - Decode `folio.toml` settings with defaults for every field.
//! - Validate values before hosts act on them.
//!
//! # Invariants
//! - A missing config file yields `FolioConfig::default()`.
//! - `log_level`, when set, is one of `trace|debug|info|warn|error`.

use crate::logging::normalize_level;
use crate::service::search_session::DEFAULT_LOADING_DELAY;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default config file name looked up by hosts.
pub const CONFIG_FILE_NAME: &str = "folio.toml";

#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: std::io::Error },
    Parse(toml::de::Error),
    InvalidValue { field: &'static str, message: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid config: {err}"),
            Self::InvalidValue { field, message } => {
                write!(f, "invalid config value for `{field}`: {message}")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::InvalidValue { .. } => None,
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        Self::Parse(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FolioConfig {
    /// Log level; hosts fall back to `default_log_level()` when unset.
    pub log_level: Option<String>,
    /// Absolute directory for rolling log files. Logging is off when unset.
    pub log_dir: Option<PathBuf>,
    /// Content JSON file; the embedded dataset is used when unset.
    pub content_path: Option<PathBuf>,
    /// Simulated loading delay of the search panel.
    pub loading_delay_ms: u64,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            log_level: None,
            log_dir: None,
            content_path: None,
            loading_delay_ms: DEFAULT_LOADING_DELAY.as_millis() as u64,
        }
    }
}

impl FolioConfig {
    /// Decodes and validates TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a config file, returning defaults when it does not exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(text) => Self::from_toml_str(&text),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(level) = &self.log_level {
            normalize_level(level).map_err(|message| ConfigError::InvalidValue {
                field: "log_level",
                message,
            })?;
        }
        if let Some(dir) = &self.log_dir {
            if !dir.is_absolute() {
                return Err(ConfigError::InvalidValue {
                    field: "log_dir",
                    message: format!("must be an absolute path, got `{}`", dir.display()),
                });
            }
        }
        Ok(())
    }

    pub fn loading_delay(&self) -> Duration {
        Duration::from_millis(self.loading_delay_ms)
    }
}
