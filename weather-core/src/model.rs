use chrono::TimeZone;
use serde::{Deserialize, Serialize};

use crate::{error::FetchError, units::{self, TemperatureUnit}};

/// Input of a single fetch. The API key travels with the request instead of
/// being looked up inside the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherRequest {
    pub location: String,
    pub api_key: String,
}

impl WeatherRequest {
    pub fn new(location: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self { location: location.into(), api_key: api_key.into() }
    }
}

/// Current conditions as decoded from the provider.
///
/// Temperature stays in Kelvin as delivered on the wire; conversion happens
/// only when the reading is displayed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    /// City name resolved by the provider, when it reports one.
    pub location_name: Option<String>,
    pub condition: String,
    pub temperature_k: f64,
    /// Unix epoch seconds.
    pub sunrise: i64,
    /// Unix epoch seconds.
    pub sunset: i64,
}

impl WeatherReading {
    pub fn temperature(&self, unit: TemperatureUnit) -> f64 {
        unit.convert_kelvin(self.temperature_k)
    }

    pub fn sunrise_clock<Tz: TimeZone>(&self, tz: &Tz) -> String
    where
        Tz::Offset: std::fmt::Display,
    {
        units::format_clock(self.sunrise, tz)
    }

    pub fn sunset_clock<Tz: TimeZone>(&self, tz: &Tz) -> String
    where
        Tz::Offset: std::fmt::Display,
    {
        units::format_clock(self.sunset, tz)
    }
}

/// Result of one bounded fetch: exactly one of a reading or a failure.
pub type FetchOutcome = Result<WeatherReading, FetchError>;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn reading() -> WeatherReading {
        WeatherReading {
            location_name: Some("London".into()),
            condition: "light rain".into(),
            temperature_k: 300.0,
            sunrise: 1_700_000_000,
            sunset: 1_700_030_000,
        }
    }

    #[test]
    fn temperature_converts_on_demand() {
        let r = reading();
        assert!((r.temperature(TemperatureUnit::Celsius) - 26.85).abs() < 1e-9);
        assert_eq!(r.temperature(TemperatureUnit::Kelvin), 300.0);
    }

    #[test]
    fn sun_times_render_in_given_zone() {
        let r = reading();
        // 1_700_000_000 == 2023-11-14T22:13:20Z
        assert_eq!(r.sunrise_clock(&Utc), "22:13:20");
        assert_eq!(r.sunset_clock(&Utc), "06:33:20");
    }
}
