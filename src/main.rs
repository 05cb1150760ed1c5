use std::sync::Arc;

use outfit_api::{
    api::{create_router, AppState},
    config::Config,
    services::providers::OpenWeatherProvider,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "outfit_api=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let provider = OpenWeatherProvider::new(
        config.openweather_api_key.clone(),
        config.openweather_api_url.clone(),
        config.weather_timeout(),
    )?;
    let state = AppState::new(Arc::new(provider), config.weather_timeout())
        .with_history_capacity(config.max_history);

    let state_capacity = state.recommendations.capacity();
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!(
        addr = %config.bind_addr(),
        history_capacity = state_capacity,
        "Server listening"
    );
    axum::serve(listener, app).await?;

    Ok(())
}
