use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, path::PathBuf, time::Duration};

use crate::provider::open_meteo::DEFAULT_TIMEOUT;

pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8080";

pub const ENV_BASE_URL: &str = "WEATHER_BASE_URL";
pub const ENV_BIND_ADDRESS: &str = "WEATHER_BIND_ADDRESS";
pub const ENV_REQUEST_TIMEOUT_SECS: &str = "WEATHER_REQUEST_TIMEOUT_SECS";

/// Service configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// base_url = "https://api.open-meteo.com/v1/forecast"
/// bind_address = "0.0.0.0:8080"
/// request_timeout_secs = 10
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Open-Meteo compatible forecast endpoint.
    pub base_url: Option<String>,
    pub bind_address: Option<String>,
    pub request_timeout_secs: Option<u64>,
}

impl Config {
    /// Load config from the platform config directory, or return an empty default
    /// if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    /// Load config from an explicit path. Unlike [`Config::load`], the file must exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::parse(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Path to the default config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-task", "weather-server")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Apply `WEATHER_*` environment variables on top of the loaded values.
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    fn with_overrides_from(mut self, var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(base_url) = var(ENV_BASE_URL) {
            self.base_url = Some(base_url);
        }
        if let Some(bind) = var(ENV_BIND_ADDRESS) {
            self.bind_address = Some(bind);
        }
        if let Some(secs) = var(ENV_REQUEST_TIMEOUT_SECS) {
            let secs = secs.trim().parse().with_context(|| {
                format!("{ENV_REQUEST_TIMEOUT_SECS} must be a whole number of seconds, got '{secs}'")
            })?;
            self.request_timeout_secs = Some(secs);
        }

        Ok(self)
    }

    /// Configured base URL, or an empty string which request validation rejects.
    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or_default()
    }

    pub fn bind_address(&self) -> &str {
        self.bind_address.as_deref().unwrap_or(DEFAULT_BIND_ADDRESS)
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout_secs.map(Duration::from_secs).unwrap_or(DEFAULT_TIMEOUT)
    }
}
