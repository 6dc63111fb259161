use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Usage counter error: {0}")]
    UsageCounter(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Route generation failed: {0}")]
    RouteGeneration(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

// Convert AppError into HTTP responses
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::UsageCounter(ref e) => {
                tracing::warn!("Usage counter error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Usage counter error")
            }
            AppError::InvalidRequest(ref e) => (StatusCode::BAD_REQUEST, e.as_str()),
            AppError::RouteGeneration(ref e) => {
                tracing::warn!("Route generation failed: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, e.as_str())
            }
            AppError::Internal(ref e) => {
                tracing::error!("Internal error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        let body = Json(json!({
            "error": status.canonical_reason().unwrap_or("Unknown error"),
            "message": error_message,
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_request_maps_to_bad_request() {
        let response = AppError::InvalidRequest("blank".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn route_generation_maps_to_server_error() {
        let response = AppError::RouteGeneration("nope".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
