//! Application configuration.
//!
//! Sources, lowest to highest precedence: built-in defaults, the RON file
//! (`./newsai.ron` or `--config`), the `NEWSAI_ENDPOINT` environment variable,
//! then `--endpoint` on the command line.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::LevelFilter;
use newsai_engine::AnalyzeSettings;
use newsai_logging::{newsai_info, newsai_warn};
use serde::{Deserialize, Serialize};

use super::Cli;

pub const DEFAULT_CONFIG_FILENAME: &str = "newsai.ron";
pub const ENDPOINT_ENV: &str = "NEWSAI_ENDPOINT";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(String),
}

/// How the config file was obtained.
#[derive(Debug)]
pub enum ConfigLoad {
    Loaded(PathBuf),
    Missing(PathBuf),
    /// The file exists but could not be used; defaults apply.
    Ignored { path: PathBuf, error: ConfigError },
}

impl ConfigLoad {
    pub fn report(&self) {
        match self {
            ConfigLoad::Loaded(path) => newsai_info!("Loaded config from {:?}", path),
            ConfigLoad::Missing(path) => newsai_info!("No config at {:?}; using defaults", path),
            ConfigLoad::Ignored { path, error } => {
                newsai_warn!("Ignoring config {:?}, using defaults: {}", path, error)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub endpoint: String,
    pub connect_timeout_ms: u64,
    pub request_timeout_ms: Option<u64>,
    pub log_to_terminal: bool,
    pub log_level: String,
    pub tick_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:5000".to_string(),
            connect_timeout_ms: 10_000,
            request_timeout_ms: None,
            log_to_terminal: false,
            log_level: "info".to_string(),
            tick_ms: 75,
        }
    }
}

impl AppConfig {
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        ron::from_str(text).map_err(|err| ConfigError::Parse(err.to_string()))
    }

    pub fn read(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    /// Loads `path`, falling back to defaults when it is missing or broken.
    ///
    /// Nothing is logged here; the caller reports the returned [`ConfigLoad`]
    /// once a logger is installed.
    pub fn load(path: &Path) -> (Self, ConfigLoad) {
        match Self::read(path) {
            Ok(config) => (config, ConfigLoad::Loaded(path.to_path_buf())),
            Err(ConfigError::Io { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                (Self::default(), ConfigLoad::Missing(path.to_path_buf()))
            }
            Err(error) => (
                Self::default(),
                ConfigLoad::Ignored {
                    path: path.to_path_buf(),
                    error,
                },
            ),
        }
    }

    /// Merges file, environment and command line. `env` looks up variables.
    pub fn resolve(cli: &Cli, env: impl Fn(&str) -> Option<String>) -> (Self, ConfigLoad) {
        let path = cli
            .config
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILENAME));
        let (mut config, load) = Self::load(&path);

        if let Some(endpoint) = env(ENDPOINT_ENV).filter(|value| !value.trim().is_empty()) {
            config.endpoint = endpoint;
        }
        if let Some(endpoint) = &cli.endpoint {
            config.endpoint = endpoint.clone();
        }
        (config, load)
    }

    pub fn analyze_settings(&self) -> AnalyzeSettings {
        AnalyzeSettings {
            endpoint: self.endpoint.clone(),
            connect_timeout: Duration::from_millis(self.connect_timeout_ms),
            request_timeout: self.request_timeout_ms.map(Duration::from_millis),
        }
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(10))
    }

    /// Unknown level names fall back to `Info`.
    pub fn log_level(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}
