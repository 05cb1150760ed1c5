use std::time::Duration;

use crate::{
    models::{Coordinates, WeatherSnapshot, WeatherSource},
    services::providers::WeatherProvider,
};

/// Looks up current weather, falling back to defaults instead of failing
///
/// A provider error or a lookup slower than `timeout` yields the default
/// snapshot (20°C, "Clear") tagged [`WeatherSource::Default`]. A reading that
/// lacks only some fields keeps what it has and defaults the rest.
pub async fn lookup_or_default(
    provider: &dyn WeatherProvider,
    coordinates: &Coordinates,
    timeout: Duration,
) -> (WeatherSnapshot, WeatherSource) {
    match tokio::time::timeout(timeout, provider.current_weather(coordinates)).await {
        Ok(Ok(reading)) => {
            if reading.temperature.is_none() || reading.condition.is_none() {
                tracing::warn!(
                    provider = provider.name(),
                    has_temperature = reading.temperature.is_some(),
                    has_condition = reading.condition.is_some(),
                    "Weather reading incomplete, defaulting missing fields"
                );
            }
            (reading.snapshot(), WeatherSource::Provider)
        }
        Ok(Err(e)) => {
            tracing::warn!(
                provider = provider.name(),
                error = %e,
                "Weather lookup failed, using defaults"
            );
            (WeatherSnapshot::default(), WeatherSource::Default)
        }
        Err(_) => {
            tracing::warn!(
                provider = provider.name(),
                timeout_ms = timeout.as_millis() as u64,
                "Weather lookup timed out, using defaults"
            );
            (WeatherSnapshot::default(), WeatherSource::Default)
        }
    }
}
