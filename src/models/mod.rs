mod recommendation;
mod weather;

pub use recommendation::{OutfitRecommendation, RecommendationResult, WeatherBucket};
pub use weather::{
    Coordinates, WeatherReading, WeatherSnapshot, WeatherSource, DEFAULT_CONDITION,
    DEFAULT_TEMPERATURE,
};
