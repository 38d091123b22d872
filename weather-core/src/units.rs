use std::{fmt, str::FromStr};

use chrono::{DateTime, TimeZone};

const KELVIN_OFFSET: f64 = 273.15;

pub fn kelvin_to_celsius(kelvin: f64) -> f64 {
    kelvin - KELVIN_OFFSET
}

pub fn kelvin_to_fahrenheit(kelvin: f64) -> f64 {
    kelvin_to_celsius(kelvin) * 9.0 / 5.0 + 32.0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "celsius",
            TemperatureUnit::Fahrenheit => "fahrenheit",
            TemperatureUnit::Kelvin => "kelvin",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
            TemperatureUnit::Kelvin => "K",
        }
    }

    pub fn convert_kelvin(&self, kelvin: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius => kelvin_to_celsius(kelvin),
            TemperatureUnit::Fahrenheit => kelvin_to_fahrenheit(kelvin),
            TemperatureUnit::Kelvin => kelvin,
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemperatureUnit {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "c" | "celsius" | "metric" => Ok(TemperatureUnit::Celsius),
            "f" | "fahrenheit" | "imperial" => Ok(TemperatureUnit::Fahrenheit),
            "k" | "kelvin" | "standard" => Ok(TemperatureUnit::Kelvin),
            _ => Err(format!(
                "Unknown unit '{value}'. Supported units: celsius, fahrenheit, kelvin."
            )),
        }
    }
}

/// Render a Unix timestamp as `HH:MM:SS` in `tz`.
pub fn format_clock<Tz: TimeZone>(epoch: i64, tz: &Tz) -> String
where
    Tz::Offset: fmt::Display,
{
    match DateTime::from_timestamp(epoch, 0) {
        Some(utc) => utc.with_timezone(tz).format("%H:%M:%S").to_string(),
        None => "--:--:--".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn kelvin_300_is_26_85_celsius() {
        assert!((kelvin_to_celsius(300.0) - 26.85).abs() < 1e-9);
    }

    #[test]
    fn freezing_point_in_fahrenheit() {
        assert!((kelvin_to_fahrenheit(273.15) - 32.0).abs() < 1e-9);
    }

    #[test]
    fn unit_parsing_accepts_aliases() {
        assert_eq!("C".parse::<TemperatureUnit>(), Ok(TemperatureUnit::Celsius));
        assert_eq!("imperial".parse::<TemperatureUnit>(), Ok(TemperatureUnit::Fahrenheit));
        assert_eq!("Kelvin".parse::<TemperatureUnit>(), Ok(TemperatureUnit::Kelvin));

        let err = "rankine".parse::<TemperatureUnit>().unwrap_err();
        assert!(err.contains("Unknown unit"));
    }

    #[test]
    fn clock_respects_timezone() {
        assert_eq!(format_clock(0, &Utc), "00:00:00");

        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
        assert_eq!(format_clock(0, &plus_two), "02:00:00");
    }

    #[test]
    fn clock_out_of_range_is_placeholder() {
        assert_eq!(format_clock(i64::MAX, &Utc), "--:--:--");
    }
}
