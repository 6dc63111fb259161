use crate::error::{AppError, Result};
use crate::models::{RouteRequest, RouteResult};
use crate::services::map_export;
use crate::AppState;
use axum::{extract::State, Json};
use geojson::FeatureCollection;
use std::sync::Arc;

/// POST /routes/random
/// Generate a random route of roughly the requested duration
pub async fn create_random_route(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RouteRequest>,
) -> Result<Json<RouteResult>> {
    let result = generate(&state, request).await?;
    Ok(Json(result))
}

/// POST /routes/random/geojson
/// Same as `/routes/random`, returned as a GeoJSON FeatureCollection for the map
pub async fn create_random_route_geojson(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RouteRequest>,
) -> Result<Json<FeatureCollection>> {
    let result = generate(&state, request).await?;
    Ok(Json(map_export::route_to_feature_collection(&result)))
}

async fn generate(state: &AppState, request: RouteRequest) -> Result<RouteResult> {
    request.validate().map_err(AppError::InvalidRequest)?;

    tracing::info!(
        start_address = %request.start_address,
        duration_min = request.duration_minutes,
        mode = %request.transport_mode,
        "Random route request: \"{}\", {}min, mode={}",
        request.start_address,
        request.duration_minutes,
        request.transport_mode
    );

    state.route_generator.generate_route(&request).await
}
