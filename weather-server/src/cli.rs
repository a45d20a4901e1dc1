use anyhow::Context;
use clap::Parser;
use std::{path::PathBuf, sync::Arc};
use weather_core::{Config, OpenMeteoProvider, WeatherService};

/// Top-level CLI struct. Flags take precedence over `WEATHER_*` variables,
/// which take precedence over the config file.
#[derive(Debug, Parser)]
#[command(name = "weather-server", version, about = "Solar forecast and weekly weather summary service")]
pub struct Cli {
    /// Open-Meteo compatible forecast endpoint, e.g. https://api.open-meteo.com/v1/forecast
    #[arg(long)]
    pub base_url: Option<String>,

    /// Address to listen on.
    #[arg(long)]
    pub bind: Option<String>,

    /// Upstream request timeout in seconds.
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Config file to use instead of the platform default.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    pub fn resolve_config(&self) -> anyhow::Result<Config> {
        let file = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        let mut cfg = file.with_env_overrides()?;

        if let Some(base_url) = &self.base_url {
            cfg.base_url = Some(base_url.clone());
        }
        if let Some(bind) = &self.bind {
            cfg.bind_address = Some(bind.clone());
        }
        if let Some(secs) = self.timeout_secs {
            cfg.request_timeout_secs = Some(secs);
        }

        Ok(cfg)
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let cfg = self.resolve_config()?;

        if cfg.base_url().is_empty() {
            // Requests are still served and answered with "Invalid base URL.".
            tracing::warn!("no upstream base URL configured; set --base-url or WEATHER_BASE_URL");
        }

        let provider = OpenMeteoProvider::new(cfg.request_timeout())?;
        let service = Arc::new(WeatherService::new(Arc::new(provider), cfg.base_url()));

        tracing::info!(
            base_url = service.base_url(),
            timeout = ?cfg.request_timeout(),
            "starting weather server"
        );

        weather_server::run_server(service, cfg.bind_address())
            .await
            .with_context(|| format!("HTTP server on {} failed", cfg.bind_address()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "base_url = \"http://from-file\"\nbind_address = \"0.0.0.0:1\"\nrequest_timeout_secs = 30\n",
        )
        .unwrap();

        let cli = Cli::parse_from([
            "weather-server",
            "--config",
            path.to_str().unwrap(),
            "--bind",
            "127.0.0.1:0",
            "--timeout-secs",
            "2",
        ]);
        let cfg = cli.resolve_config().unwrap();

        assert_eq!(cfg.bind_address(), "127.0.0.1:0");
        assert_eq!(cfg.request_timeout(), std::time::Duration::from_secs(2));
        if std::env::var("WEATHER_BASE_URL").is_err() {
            assert_eq!(cfg.base_url(), "http://from-file");
        }
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let cli = Cli::parse_from(["weather-server", "--config", "/definitely/not/here.toml"]);
        assert!(cli.resolve_config().is_err());
    }
}
