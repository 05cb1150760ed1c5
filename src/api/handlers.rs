use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::db::DEFAULT_PAGE_SIZE;
use crate::error::{AppError, AppResult};
use crate::middleware::request_id::RequestId;
use crate::models::{OutfitRecommendation, RecommendationResult, WeatherBucket, DEFAULT_CONDITION};
use crate::services::{outfit, recommendations};

use super::AppState;

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct CreateRecommendationRequest {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(alias = "limit")]
    pub page_size: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct PreviewQuery {
    pub temperature: f64,
    pub condition: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PreviewResponse {
    pub bucket: WeatherBucket,
    #[serde(flatten)]
    pub result: RecommendationResult,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Generate an outfit recommendation from the current weather at a location
pub async fn create_recommendation(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    request: Result<Json<CreateRecommendationRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<OutfitRecommendation>)> {
    let Json(request) = request.map_err(|rejection| match rejection {
        JsonRejection::JsonDataError(_) | JsonRejection::JsonSyntaxError(_) => {
            AppError::InvalidCoordinate(rejection.body_text())
        }
        other => AppError::from(other),
    })?;

    tracing::info!(
        request_id = %request_id,
        latitude = request.latitude,
        longitude = request.longitude,
        "Processing recommendation request"
    );

    let recommendation = recommendations::generate_outfit_recommendation(
        state.weather_provider.as_ref(),
        &state.recommendations,
        request.latitude,
        request.longitude,
        state.weather_timeout,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(recommendation)))
}

/// Recommendation history, newest first
pub async fn list_recommendations(
    State(state): State<AppState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> AppResult<Json<Vec<OutfitRecommendation>>> {
    let Query(query) = query?;
    let page_size = query.page_size.unwrap_or(DEFAULT_PAGE_SIZE);
    Ok(Json(state.recommendations.list(page_size).await))
}

/// A single recommendation by ID
pub async fn get_recommendation(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> AppResult<Json<OutfitRecommendation>> {
    let Path(id) = id?;
    state
        .recommendations
        .get(id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("recommendation {}", id)))
}

/// Run the outfit table on explicit weather, without a provider lookup
pub async fn preview_recommendation(
    query: Result<Query<PreviewQuery>, QueryRejection>,
) -> AppResult<Json<PreviewResponse>> {
    let Query(query) = query?;
    if !query.temperature.is_finite() {
        return Err(AppError::InvalidInput(
            "temperature must be a finite number".to_string(),
        ));
    }

    let condition = query.condition.as_deref().unwrap_or(DEFAULT_CONDITION);
    let bucket = outfit::classify(query.temperature, condition);

    Ok(Json(PreviewResponse {
        bucket,
        result: outfit::render(bucket, query.temperature),
    }))
}
