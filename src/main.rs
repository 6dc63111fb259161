use axum::Router;
use random_route::config::Config;
use random_route::services::geocoder::Geocoder;
use random_route::services::google_geocoding::GoogleGeocodingClient;
use random_route::services::route_generator::RouteGenerator;
use random_route::usage::{MemoryUsageCounter, RedisUsageCounter, UsageCounter};
use random_route::AppState;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "random_route=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().map_err(|e| format!("Failed to load configuration: {}", e))?;
    config
        .route_generator
        .validate()
        .map_err(|e| format!("Invalid route generator configuration: {}", e))?;

    tracing::info!("Starting random route server");
    tracing::info!("Configuration loaded successfully");

    // Usage counter: try Redis, fall back to in-memory
    let usage_counter: Arc<dyn UsageCounter> = if let Some(ref redis_url) = config.redis_url {
        tracing::info!("Connecting to Redis usage counter...");
        match RedisUsageCounter::new(redis_url).await {
            Ok(counter) => Arc::new(counter),
            Err(e) => {
                tracing::warn!(
                    "Failed to connect to Redis: {}. Falling back to in-memory usage counter.",
                    e
                );
                Arc::new(MemoryUsageCounter::new())
            }
        }
    } else {
        tracing::info!("Redis URL not configured. Using in-memory usage counter.");
        Arc::new(MemoryUsageCounter::new())
    };

    // Remote geocoding only when a key is configured
    let remote = GoogleGeocodingClient::from_config(&config.geocoding)
        .map_err(|e| format!("Failed to build geocoding client: {}", e))?;
    if remote.is_none() {
        tracing::info!("GOOGLE_MAPS_API_KEY not set. Geocoding uses the offline table only.");
    }

    let geocoder = Geocoder::new(remote, usage_counter, config.geocoding.daily_limit);
    let route_generator = RouteGenerator::new(geocoder, config.route_generator.clone());

    // Create application state
    let state = Arc::new(AppState { route_generator });

    // Build router with CORS and tracing; the form UI is served from the static dir
    let app = Router::new()
        .nest("/api/v1", random_route::routes::create_router(state))
        .fallback_service(ServeDir::new(&config.static_dir))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = config.server_address();
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
