use std::time::Duration;

use crate::{
    db::RecommendationStore,
    error::AppResult,
    models::{Coordinates, OutfitRecommendation},
    services::{outfit, providers::WeatherProvider, weather_lookup},
};

/// Generates and records an outfit recommendation for a location
///
/// Current weather comes from `provider`; when it cannot answer within
/// `timeout` the defaults (20°C, "Clear") stand in, so this only fails on
/// invalid coordinates.
pub async fn generate_outfit_recommendation(
    provider: &dyn WeatherProvider,
    store: &RecommendationStore,
    latitude: f64,
    longitude: f64,
    timeout: Duration,
) -> AppResult<OutfitRecommendation> {
    let coordinates = Coordinates::new(latitude, longitude)?;

    let (weather, weather_source) =
        weather_lookup::lookup_or_default(provider, &coordinates, timeout).await;

    let bucket = outfit::classify(weather.temperature, &weather.condition);
    let result = outfit::render(bucket, weather.temperature);

    let recommendation =
        OutfitRecommendation::new(coordinates, weather, weather_source, bucket, result);

    let history_size = store.insert(recommendation.clone()).await;

    tracing::info!(
        recommendation_id = %recommendation.id,
        bucket = ?recommendation.bucket,
        hazard = recommendation.bucket.is_hazard(),
        weather_source = ?recommendation.weather_source,
        temperature = recommendation.weather.temperature,
        condition = %recommendation.weather.condition,
        history_size,
        "Outfit recommendation generated"
    );

    Ok(recommendation)
}
