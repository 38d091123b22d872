use std::{path::PathBuf, sync::Arc, time::Duration};

use anyhow::Context;
use clap::Parser;
use weather_core::{
    BoundedFetch, Config, OpenWeatherProvider, TemperatureUnit, WeatherRequest,
    config::{self, API_KEY_ENV},
    fetch::DEFAULT_DEADLINE,
};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Show current weather for a location")]
pub struct Cli {
    /// Location to get weather information for; falls back to the configured default.
    #[arg(short, long)]
    pub location: Option<String>,

    /// Store LOCATION as the default in the config file and exit.
    #[arg(long, value_name = "LOCATION")]
    pub set_default_location: Option<String>,

    /// Path of the JSON config file (default: platform config directory).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// OpenWeatherMap API key.
    #[arg(long, env = API_KEY_ENV, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Temperature unit to display: celsius, fahrenheit or kelvin.
    #[arg(short, long, default_value_t = TemperatureUnit::Celsius)]
    pub units: TemperatureUnit,

    /// Give up on the request after this many seconds.
    #[arg(long, value_name = "SECS", default_value_t = DEFAULT_DEADLINE.as_secs())]
    pub timeout: u64,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config_path = match &self.config {
            Some(path) => path.clone(),
            None => Config::config_file_path()?,
        };
        let mut cfg = Config::load_from(&config_path)?;

        if let Some(location) = self.set_default_location.as_deref() {
            let location = location.trim();
            anyhow::ensure!(!location.is_empty(), "default location must not be empty");

            cfg.set_default_location(location);
            cfg.save_to(&config_path)?;
            log::info!("wrote {}", config_path.display());

            println!("Default location set to {location}");
            return Ok(());
        }

        let location = cfg.effective_location(self.location.as_deref())?;
        let api_key = config::require_api_key(self.api_key.as_deref())?;

        let provider = OpenWeatherProvider::new()?;
        let fetch = BoundedFetch::new(Arc::new(provider))
            .with_deadline(Duration::from_secs(self.timeout));

        let reading = fetch
            .fetch(WeatherRequest::new(location.clone(), api_key))
            .await
            .with_context(|| format!("Failed to fetch weather for {location}"))?;

        print!("{}", render::report(&location, &reading, self.units, &chrono::Local));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_location_and_units() {
        let cli = Cli::try_parse_from(["weather", "--location", "Oslo", "--units", "f"]).unwrap();

        assert_eq!(cli.location.as_deref(), Some("Oslo"));
        assert_eq!(cli.units, TemperatureUnit::Fahrenheit);
        assert_eq!(cli.timeout, 15);
    }

    #[test]
    fn units_default_to_celsius() {
        let cli = Cli::try_parse_from(["weather"]).unwrap();
        assert_eq!(cli.units, TemperatureUnit::Celsius);
    }

    #[test]
    fn rejects_unknown_unit() {
        assert!(Cli::try_parse_from(["weather", "--units", "rankine"]).is_err());
    }

    #[test]
    fn accepts_set_default_location() {
        let cli =
            Cli::try_parse_from(["weather", "--set-default-location", "Lima", "--config", "c.json"])
                .unwrap();

        assert_eq!(cli.set_default_location.as_deref(), Some("Lima"));
        assert_eq!(cli.config, Some(PathBuf::from("c.json")));
    }

    #[tokio::test]
    async fn set_default_location_writes_config_without_fetching() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let cli = Cli::try_parse_from([
            "weather",
            "--set-default-location",
            "Kyoto",
            "--config",
            path.to_str().unwrap(),
        ])
        .unwrap();
        cli.run().await.unwrap();

        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg.default_location.as_deref(), Some("Kyoto"));
    }

    #[tokio::test]
    async fn missing_location_fails_before_network() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let cli = Cli::try_parse_from([
            "weather",
            "--config",
            path.to_str().unwrap(),
            "--api-key",
            "KEY",
        ])
        .unwrap();
        let err = cli.run().await.unwrap_err();

        assert!(err.to_string().contains("no location given"));
    }

    #[tokio::test]
    async fn empty_api_key_fails_before_network() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let cli = Cli::try_parse_from([
            "weather",
            "--config",
            path.to_str().unwrap(),
            "--location",
            "Oslo",
            "--api-key",
            "",
        ])
        .unwrap();
        let err = cli.run().await.unwrap_err();

        assert!(err.to_string().contains("no API key provided"));
    }
}
