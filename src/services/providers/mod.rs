/// Weather data provider abstraction
///
/// Recommendations only need the current temperature and condition at a
/// coordinate, so a provider exposes a single lookup. Implementations report
/// whatever the upstream API returned; defaulting missing values is left to
/// the caller.
use crate::{
    error::AppResult,
    models::{Coordinates, WeatherReading},
};

pub mod openweather;

pub use openweather::OpenWeatherProvider;

/// Trait for current-weather providers
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Fetch current conditions at the given coordinates
    async fn current_weather(&self, coordinates: &Coordinates) -> AppResult<WeatherReading>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
