pub mod debug;
pub mod random_route;
pub mod suggestions;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/routes/random", post(random_route::create_random_route))
        .route(
            "/routes/random/geojson",
            post(random_route::create_random_route_geojson),
        )
        .route(
            "/addresses/suggestions",
            get(suggestions::address_suggestions),
        )
        .route("/debug/health", get(debug::health_check))
        .with_state(state)
}
