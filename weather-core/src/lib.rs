//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - A deadline-bounded fetch of current conditions
//! - Abstraction over weather providers, with an OpenWeatherMap implementation
//! - Shared domain models, unit conversion and condition glyphs
//! - Configuration file handling
//!
//! It is used by `weather-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod fetch;
pub mod glyph;
pub mod model;
pub mod provider;
pub mod units;

pub use config::Config;
pub use error::{ConfigError, FetchError};
pub use fetch::BoundedFetch;
pub use glyph::Glyph;
pub use model::{FetchOutcome, WeatherReading, WeatherRequest};
pub use provider::{OpenWeatherProvider, WeatherProvider};
pub use units::TemperatureUnit;
