use async_trait::async_trait;
use std::fmt::Debug;

use crate::model::{FetchOutcome, WeatherRequest};

pub mod openweather;

pub use openweather::OpenWeatherProvider;

/// A source of current weather conditions.
///
/// Implementations perform exactly one request per call and never retry;
/// the deadline is enforced by [`crate::fetch::BoundedFetch`], not here.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current(&self, request: &WeatherRequest) -> FetchOutcome;
}
