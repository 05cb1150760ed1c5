use std::time::Duration;

use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// OpenWeather API key
    pub openweather_api_key: String,

    /// OpenWeather API base URL
    #[serde(default = "default_openweather_api_url")]
    pub openweather_api_url: String,

    /// Upper bound on a single weather lookup, in seconds
    #[serde(default = "default_weather_timeout_secs")]
    pub weather_timeout_secs: u64,

    /// Most recommendations kept in history before the oldest is evicted
    #[serde(default = "default_max_history")]
    pub max_history: usize,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_openweather_api_url() -> String {
    "https://api.openweathermap.org".to_string()
}

fn default_weather_timeout_secs() -> u64 {
    5
}

fn default_max_history() -> usize {
    crate::db::DEFAULT_HISTORY_CAPACITY
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    pub fn weather_timeout(&self) -> Duration {
        Duration::from_secs(self.weather_timeout_secs)
    }

    /// Address the HTTP listener binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
