/// OpenWeather current-weather provider
///
/// Calls `/data/2.5/weather` in metric units. The payload is decoded
/// leniently: any of the fields we care about may be absent and comes back
/// as `None` instead of failing the whole lookup.
use crate::{
    error::{AppError, AppResult},
    models::{Coordinates, WeatherReading},
    services::providers::WeatherProvider,
};
use chrono::{DateTime, Utc};
use reqwest::Client as HttpClient;
use serde::Deserialize;
use std::time::Duration;

const PROVIDER_NAME: &str = "openweather";

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    #[serde(default)]
    main: Option<OwMain>,
    #[serde(default)]
    weather: Vec<OwCondition>,
    #[serde(default)]
    wind: Option<OwWind>,
    #[serde(default)]
    dt: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
struct OwMain {
    #[serde(default)]
    temp: Option<f64>,
    #[serde(default)]
    feels_like: Option<f64>,
    #[serde(default)]
    humidity: Option<u8>,
}

#[derive(Debug, Deserialize)]
struct OwCondition {
    #[serde(default)]
    main: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct OwWind {
    #[serde(default)]
    speed: Option<f64>,
}

#[derive(Clone)]
pub struct OpenWeatherProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String, api_url: String, timeout: Duration) -> AppResult<Self> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            api_key,
            api_url: api_url.trim_end_matches('/').to_string(),
        })
    }

    fn convert_api_response(&self, response: OwCurrentResponse) -> WeatherReading {
        let main = response.main.unwrap_or_default();
        let observed_at = response
            .dt
            .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0))
            .unwrap_or_else(Utc::now);

        WeatherReading {
            provider: PROVIDER_NAME.to_string(),
            temperature: main.temp,
            condition: response.weather.into_iter().find_map(|w| w.main),
            feels_like: main.feels_like,
            humidity: main.humidity,
            wind_speed: response.wind.and_then(|w| w.speed),
            observed_at,
        }
    }
}

#[async_trait::async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current_weather(&self, coordinates: &Coordinates) -> AppResult<WeatherReading> {
        let url = format!("{}/data/2.5/weather", self.api_url);
        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("lat", coordinates.latitude.to_string()),
                ("lon", coordinates.longitude.to_string()),
                ("appid", self.api_key.clone()),
                ("units", "metric".to_string()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "API returned status {}: {}",
                status, body
            )));
        }

        let payload: OwCurrentResponse = response.json().await?;
        let reading = self.convert_api_response(payload);

        tracing::info!(
            latitude = coordinates.latitude,
            longitude = coordinates.longitude,
            temperature = ?reading.temperature,
            condition = ?reading.condition,
            provider = PROVIDER_NAME,
            "Current weather fetched"
        );

        Ok(reading)
    }

    fn name(&self) -> &'static str {
        PROVIDER_NAME
    }
}
