use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Coordinates, WeatherSnapshot, WeatherSource};

/// Which row of the outfit decision table was selected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherBucket {
    /// Snowing, regardless of temperature
    Snow,
    /// Raining, regardless of temperature
    Rain,
    /// ≤ -5°C
    Frigid,
    /// ≤ 0°C
    Freezing,
    /// ≤ 5°C
    Cold,
    /// ≤ 9°C
    Chilly,
    /// ≤ 11°C
    Cool,
    /// ≤ 17°C
    Mild,
    /// ≤ 21°C
    Pleasant,
    /// ≤ 25°C
    Warm,
    /// ≤ 29°C
    Hot,
    /// > 29°C
    Sweltering,
}

impl WeatherBucket {
    /// Every bucket, hazards first and then the temperature ladder in ascending order
    pub const fn all() -> &'static [WeatherBucket] {
        &[
            WeatherBucket::Snow,
            WeatherBucket::Rain,
            WeatherBucket::Frigid,
            WeatherBucket::Freezing,
            WeatherBucket::Cold,
            WeatherBucket::Chilly,
            WeatherBucket::Cool,
            WeatherBucket::Mild,
            WeatherBucket::Pleasant,
            WeatherBucket::Warm,
            WeatherBucket::Hot,
            WeatherBucket::Sweltering,
        ]
    }

    /// True for buckets chosen by condition rather than temperature
    pub fn is_hazard(&self) -> bool {
        matches!(self, WeatherBucket::Snow | WeatherBucket::Rain)
    }
}

/// Three outfit suggestions and the reasoning behind them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationResult {
    pub option_1: String,
    pub option_2: Option<String>,
    pub option_3: Option<String>,
    pub explanation: String,
}

/// A recommendation as kept in history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutfitRecommendation {
    pub id: Uuid,
    pub latitude: f64,
    pub longitude: f64,
    pub weather: WeatherSnapshot,
    pub weather_source: WeatherSource,
    pub bucket: WeatherBucket,
    #[serde(flatten)]
    pub result: RecommendationResult,
    pub created_at: DateTime<Utc>,
}

impl OutfitRecommendation {
    pub fn new(
        coordinates: Coordinates,
        weather: WeatherSnapshot,
        weather_source: WeatherSource,
        bucket: WeatherBucket,
        result: RecommendationResult,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            latitude: coordinates.latitude,
            longitude: coordinates.longitude,
            weather,
            weather_source,
            bucket,
            result,
            created_at: Utc::now(),
        }
    }
}
