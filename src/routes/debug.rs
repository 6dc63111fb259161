use crate::usage;
use crate::AppState;
use axum::{extract::State, Json};
use serde_json::{json, Value};
use std::sync::Arc;

/// GET /debug/health - Check if services are working
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<Value> {
    let geocoder = state.route_generator.geocoder();
    let counter = geocoder.usage_counter();

    let mut status = json!({
        "status": "ok",
        "checks": {
            "usage_counter": {
                "backend": counter.backend_name(),
            }
        }
    });

    // Check usage counter backend
    if counter.health_check().await {
        status["checks"]["usage_counter"]["status"] = json!("ok");
    } else {
        status["checks"]["usage_counter"]["status"] = json!("error");
        status["status"] = json!("error");
    }

    // Today's remote geocoding usage
    match counter.get(usage::today()).await {
        Ok(used) => {
            status["checks"]["geocoding_usage"] = json!({
                "used": used,
                "limit": geocoder.daily_limit(),
            });
        }
        Err(e) => {
            status["checks"]["geocoding_usage"] = json!({"error": e.to_string()});
        }
    }

    Json(status)
}
