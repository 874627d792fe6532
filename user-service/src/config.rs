// Client configuration
// Layered: defaults, global config file, local `userdeck.toml`, explicit
// `--config` file, environment, then command-line flags (applied by the caller).

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Backend used when nothing else is configured
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

pub const CONFIG_DIR: &str = "userdeck";
pub const LOCAL_CONFIG_FILE: &str = "userdeck.toml";

pub const ENV_API_URL: &str = "USERDECK_API_URL";
pub const ENV_LOG: &str = "USERDECK_LOG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    /// No timeout unless set
    pub timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout_secs: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// `tracing_subscriber::EnvFilter` directive
    pub level: String,
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

/// On-disk shape: every key optional so a file only overrides what it names
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    api: ApiSection,
    log: LogSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ApiSection {
    base_url: Option<String>,
    timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct LogSection {
    level: Option<String>,
    file: Option<PathBuf>,
}

impl Config {
    /// Load from the standard locations plus an optional explicit file,
    /// then apply environment overrides from the process environment.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let mut paths = Vec::new();
        if let Some(global) = Self::global_config_path() {
            paths.push(global);
        }
        paths.push(PathBuf::from(LOCAL_CONFIG_FILE));

        let mut config = Self::load_layers(&paths, explicit)?;
        config.apply_env(|name| std::env::var(name).ok());
        Ok(config)
    }

    /// Merge the given files in order. Missing optional layers are skipped;
    /// an explicit file must exist.
    pub fn load_layers(paths: &[PathBuf], explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        for path in paths {
            if path.exists() {
                config.merge(Self::read_file(path)?);
            }
        }

        if let Some(path) = explicit {
            config.merge(Self::read_file(path)?);
        }

        Ok(config)
    }

    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup(ENV_API_URL).filter(|v| !v.is_empty()) {
            self.set_base_url(url);
        }
        if let Some(level) = lookup(ENV_LOG).filter(|v| !v.is_empty()) {
            self.log.level = level;
        }
    }

    pub fn set_base_url(&mut self, url: impl Into<String>) {
        let url = url.into();
        self.api.base_url = url.trim_end_matches('/').to_string();
    }

    /// Default log destination for the interactive client
    pub fn default_log_file() -> PathBuf {
        dirs::cache_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CONFIG_DIR)
            .join("userdeck.log")
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(CONFIG_DIR).join("config.toml"))
    }

    fn read_file(path: &Path) -> Result<ConfigFile, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source: e,
        })
    }

    fn merge(&mut self, file: ConfigFile) {
        if let Some(url) = file.api.base_url {
            self.set_base_url(url);
        }
        if file.api.timeout_secs.is_some() {
            self.api.timeout_secs = file.api.timeout_secs;
        }
        if let Some(level) = file.log.level {
            self.log.level = level;
        }
        if file.log.file.is_some() {
            self.log.file = file.log.file;
        }
    }
}
