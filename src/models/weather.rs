use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Temperature used when the weather lookup cannot supply one
pub const DEFAULT_TEMPERATURE: f64 = 20.0;

/// Condition used when the weather lookup cannot supply one
pub const DEFAULT_CONDITION: &str = "Clear";

/// Geographic position a recommendation is requested for
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Builds validated coordinates
    ///
    /// Latitude must lie in `[-90, 90]` and longitude in `[-180, 180]`.
    pub fn new(latitude: f64, longitude: f64) -> AppResult<Self> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(AppError::InvalidCoordinate(format!(
                "latitude {} is outside [-90, 90]",
                latitude
            )));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(AppError::InvalidCoordinate(format!(
                "longitude {} is outside [-180, 180]",
                longitude
            )));
        }

        Ok(Self {
            latitude,
            longitude,
        })
    }
}

/// The two weather facts the outfit selector consumes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Degrees Celsius
    pub temperature: f64,
    /// Free-text label such as "Clear", "Rain" or "눈"
    pub condition: String,
}

impl Default for WeatherSnapshot {
    fn default() -> Self {
        Self {
            temperature: DEFAULT_TEMPERATURE,
            condition: DEFAULT_CONDITION.to_string(),
        }
    }
}

/// Where the snapshot behind a recommendation came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherSource {
    /// Reported by the weather provider (missing fields may still be defaulted)
    Provider,
    /// Provider failed or timed out; fallback defaults were used
    Default,
}

/// Current conditions as reported by a weather provider
///
/// Every measurement is optional since providers routinely omit fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    pub provider: String,
    pub temperature: Option<f64>,
    pub condition: Option<String>,
    pub feels_like: Option<f64>,
    pub humidity: Option<u8>,
    pub wind_speed: Option<f64>,
    pub observed_at: DateTime<Utc>,
}

impl WeatherReading {
    /// Reduces the reading to a snapshot, defaulting whichever field is missing
    pub fn snapshot(&self) -> WeatherSnapshot {
        WeatherSnapshot {
            temperature: self.temperature.unwrap_or(DEFAULT_TEMPERATURE),
            condition: self
                .condition
                .clone()
                .unwrap_or_else(|| DEFAULT_CONDITION.to_string()),
        }
    }
}
