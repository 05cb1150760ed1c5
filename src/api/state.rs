use std::sync::Arc;
use std::time::Duration;

use crate::db::RecommendationStore;
use crate::services::providers::WeatherProvider;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub weather_provider: Arc<dyn WeatherProvider>,
    pub recommendations: RecommendationStore,
    /// Upper bound on a weather lookup before defaults are used
    pub weather_timeout: Duration,
}

impl AppState {
    /// Creates state with an empty recommendation history of default capacity
    pub fn new(weather_provider: Arc<dyn WeatherProvider>, weather_timeout: Duration) -> Self {
        Self {
            weather_provider,
            recommendations: RecommendationStore::new(),
            weather_timeout,
        }
    }

    /// Replaces the history with an empty one bounded to `capacity` records
    pub fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.recommendations = RecommendationStore::with_capacity(capacity);
        self
    }
}
