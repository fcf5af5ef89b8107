use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::types::Config;

/// Errors surfaced while loading the config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("config file {path} is not valid TOML")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config: {0}")]
    Invalid(String),
}

impl Config {
    /// Location of the config file: `~/.config/cambio/config.toml` on
    /// Unix/macOS, the platform equivalent elsewhere. Falls back to the
    /// current directory when no config dir exists.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("cambio")
            .join("config.toml")
    }

    /// Loads the config file, treating a missing file as defaults.
    ///
    /// Any other failure, unreadable file, bad TOML, or a value that
    /// fails validation, is an error rather than a silent fallback.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();
        match fs::read_to_string(&path) {
            Ok(content) => Self::parse(&content, &path),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(ConfigError::Read { path, source: e }),
        }
    }

    /// Loads the config from an explicit path. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects values the rest of the app cannot work with: an empty
    /// rates endpoint, an empty base currency, or a zero timeout (every
    /// fetch would fail before the request leaves).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rates.endpoint.trim().is_empty() {
            return Err(ConfigError::Invalid("rates endpoint is empty".into()));
        }
        if self.rates.base_currency.trim().is_empty() {
            return Err(ConfigError::Invalid("base currency is empty".into()));
        }
        if self.rates.timeout_seconds == 0 {
            return Err(ConfigError::Invalid("request timeout is 0".into()));
        }
        if self.rates.connect_timeout_seconds == 0 {
            return Err(ConfigError::Invalid("connect timeout is 0".into()));
        }
        Ok(())
    }
}
