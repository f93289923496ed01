use std::{fmt, fs, path::Path};

use marquee_dom::Selector;
use serde::Deserialize;

use crate::history::{History, HistoryMode};

/// Configuration errors
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file
    Read {
        path: String,
        source: std::io::Error,
    },
    /// File contents are not a valid configuration
    Parse(String),
    /// Configuration parsed but holds an unusable value
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Read { path, source } => {
                write!(f, "Failed to read config file '{}': {}", path, source)
            }
            ConfigError::Parse(msg) => write!(f, "Failed to parse config: {}", msg),
            ConfigError::Invalid(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Read { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    pub mode: HistoryMode,
    pub base: String,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        HistoryConfig {
            mode: HistoryMode::Web,
            base: "/".to_string(),
        }
    }
}

/// Application bootstrap configuration. Every field has a default, so an
/// empty JSON object is a valid configuration.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Document title
    pub title: String,
    /// Element the application mounts into
    pub mount_selector: String,
    pub history: HistoryConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            title: "Movies".to_string(),
            mount_selector: "#app".to_string(),
            history: HistoryConfig::default(),
        }
    }
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_json(&contents)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.history.base.starts_with('/') {
            return Err(ConfigError::Invalid(format!(
                "history base '{}' must start with '/'",
                self.history.base
            )));
        }

        Selector::parse(&self.mount_selector)
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;

        Ok(())
    }

    pub fn history(&self) -> History {
        History::new(self.history.mode, &self.history.base)
    }
}
