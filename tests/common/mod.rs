use random_route::config::{GeocodingConfig, RouteGeneratorConfig};
use random_route::services::geocoder::Geocoder;
use random_route::services::google_geocoding::GoogleGeocodingClient;
use random_route::services::route_generator::RouteGenerator;
use random_route::usage::{MemoryUsageCounter, UsageCounter};
use random_route::AppState;
use serde_json::{json, Value};
use std::sync::Arc;
use time::{Date, Month};

/// Fixed day so counter assertions don't race midnight
#[allow(dead_code)]
pub fn test_date() -> Date {
    Date::from_calendar_date(2026, Month::October, 19).unwrap()
}

/// Geocoding config pointed at a mock server
#[allow(dead_code)]
pub fn mock_geocoding_config(base_url: &str) -> GeocodingConfig {
    GeocodingConfig {
        api_key: Some("test_key".to_string()),
        base_url: format!("{}/maps/api/geocode/json", base_url),
        timeout_secs: 1,
        ..GeocodingConfig::default()
    }
}

/// Geocoder that calls the mock server, sharing the returned counter
#[allow(dead_code)]
pub fn mock_geocoder(base_url: &str) -> (Geocoder, Arc<dyn UsageCounter>) {
    let config = mock_geocoding_config(base_url);
    let counter: Arc<dyn UsageCounter> = Arc::new(MemoryUsageCounter::new());
    let client = GoogleGeocodingClient::from_config(&config).unwrap();
    let geocoder = Geocoder::new(client, counter.clone(), config.daily_limit);
    (geocoder, counter)
}

/// App wired to the offline table only
#[allow(dead_code)]
pub fn offline_test_app() -> axum::Router {
    let route_generator =
        RouteGenerator::with_seed(Geocoder::offline(), RouteGeneratorConfig::default(), 42);
    let state = Arc::new(AppState { route_generator });

    random_route::routes::create_router(state)
}

/// Successful Google Geocoding response body
#[allow(dead_code)]
pub fn ok_body(lat: f64, lng: f64) -> Value {
    json!({
        "status": "OK",
        "results": [{
            "formatted_address": "somewhere",
            "geometry": { "location": { "lat": lat, "lng": lng } }
        }]
    })
}

/// Non-OK Google Geocoding response body
#[allow(dead_code)]
pub fn status_body(status: &str) -> Value {
    json!({ "status": status, "results": [] })
}
