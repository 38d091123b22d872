use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::{
    error::FetchError,
    model::{FetchOutcome, WeatherReading, WeatherRequest},
};

use super::WeatherProvider;

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";
pub const DEFAULT_TRANSPORT_TIMEOUT: Duration = Duration::from_secs(10);

const CURRENT_PATH: &str = "/data/2.5/weather";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new() -> Result<Self, FetchError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Point the provider at another host, e.g. a local stub or a proxy.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, FetchError> {
        let http = Client::builder()
            .timeout(DEFAULT_TRANSPORT_TIMEOUT)
            .build()
            .map_err(|e| FetchError::Transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { base_url: base_url.into().trim_end_matches('/').to_string(), http })
    }

    pub fn current_url(&self) -> String {
        format!("{}{}", self.base_url, CURRENT_PATH)
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current(&self, request: &WeatherRequest) -> FetchOutcome {
        let url = self.current_url();
        log::debug!("GET {url} q={}", request.location);

        let res = self
            .http
            .get(&url)
            .query(&[("q", request.location.as_str()), ("appid", request.api_key.as_str())])
            .send()
            .await
            .map_err(|e| FetchError::Transport(format!("failed to send request to OpenWeather: {e}")))?;

        let status = res.status();
        log::debug!("OpenWeather responded with {status}");

        let body = res
            .text()
            .await
            .map_err(|e| FetchError::Transport(format!("failed to read OpenWeather response body: {e}")))?;

        parse_current(status, &body)
    }
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct OwSys {
    sunrise: i64,
    sunset: i64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    #[serde(default)]
    name: Option<String>,
    weather: Vec<OwWeather>,
    main: OwMain,
    sys: OwSys,
}

/// Turn a raw HTTP status and body into a reading.
pub(crate) fn parse_current(status: StatusCode, body: &str) -> FetchOutcome {
    if !status.is_success() {
        return Err(FetchError::Decode(format!(
            "OpenWeather request failed with status {}: {}",
            status,
            truncate_body(body),
        )));
    }

    let parsed: OwCurrentResponse = serde_json::from_str(body)
        .map_err(|e| FetchError::Decode(format!("failed to parse OpenWeather JSON: {e}")))?;

    let condition = parsed
        .weather
        .into_iter()
        .next()
        .map(|w| w.description)
        .ok_or_else(|| FetchError::Decode("OpenWeather response contained no weather entries".into()))?;

    Ok(WeatherReading {
        location_name: parsed.name.filter(|n| !n.is_empty()),
        condition,
        temperature_k: parsed.main.temp,
        sunrise: parsed.sys.sunrise,
        sunset: parsed.sys.sunset,
    })
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }

    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}
