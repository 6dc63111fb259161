//! Stable application-wide constants.
//!
//! Values here are structural invariants, algorithm coefficients, and default
//! fallbacks for env-var-based configuration. Speeds and jitter that are worth
//! tuning at runtime live in [`RouteGeneratorConfig`](crate::config::RouteGeneratorConfig).

// --- Server defaults (used when HOST / PORT env vars are absent) ---

/// Default bind address for the HTTP server.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default port for the HTTP server.
pub const DEFAULT_PORT: &str = "3000";
/// Directory holding the static form + map UI. Overridden by `STATIC_DIR`.
pub const DEFAULT_STATIC_DIR: &str = "app";

// --- Remote geocoding ---

/// Google Geocoding API JSON endpoint.
pub const GOOGLE_GEOCODING_BASE_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";
pub const DEFAULT_GEOCODING_LANGUAGE: &str = "ja";
pub const DEFAULT_GEOCODING_REGION: &str = "jp";
/// Upper bound on a single remote lookup. After this the offline table is used.
pub const DEFAULT_GEOCODING_TIMEOUT_SECONDS: u64 = 5;
/// Remote attempts allowed per calendar day (safety margin under the free tier).
pub const DEFAULT_DAILY_GEOCODING_LIMIT: u32 = 100;

// --- Usage counter ---

/// Key prefix for the per-day remote geocoding counter.
pub const USAGE_KEY_PREFIX: &str = "google_maps_api_usage_";
/// Counter keys outlive their day by one more day, then expire.
pub const USAGE_KEY_TTL_SECONDS: u64 = 172_800;
/// Only a handful of date keys are ever live at once.
pub const USAGE_COUNTER_MAX_ENTRIES: u64 = 64;

// --- Route synthesis ---

/// Assumed walking speed (m/s). Overridden by `ROUTE_WALKING_SPEED_MPS`.
pub const DEFAULT_WALKING_SPEED_MPS: f64 = 1.4;
/// Assumed cycling speed (m/s). Overridden by `ROUTE_CYCLING_SPEED_MPS`.
pub const DEFAULT_CYCLING_SPEED_MPS: f64 = 4.0;
/// Half-width (degrees) of the uniform jitter applied to the goal point on each
/// axis. Overridden by `ROUTE_END_JITTER_DEG`.
pub const DEFAULT_END_POINT_JITTER_DEG: f64 = 0.005;

/// Fewest waypoints a synthesized route may have. The goal point is derived from
/// the last waypoint, so this must stay at least 1.
pub const MIN_WAYPOINTS: usize = 1;
/// Most waypoints a synthesized route may have.
pub const MAX_WAYPOINTS: usize = 3;
/// Radial jitter applied to each waypoint, as a fraction of one segment length.
/// 0.5 spans -25%..+25% of a segment.
pub const WAYPOINT_RADIUS_JITTER_FRACTION: f64 = 0.5;
/// Flat-earth approximation: metres per degree of latitude.
pub const METERS_PER_DEGREE_LAT: f64 = 111_000.0;

/// Interpolation steps per leg of the polyline (11 points per leg, shared joins).
pub const ROUTE_SEGMENT_STEPS: usize = 10;
/// Mean Earth radius used by the haversine distance.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

// --- Request validation ---

pub const MIN_DURATION_MINUTES: u32 = 1;
pub const MAX_DURATION_MINUTES: u32 = 240;

// --- Labels and user-facing messages ---

pub const WAYPOINT_LABEL_PREFIX: &str = "Waypoint";
pub const GOAL_LABEL: &str = "Goal";
/// The only message a caller sees when generation fails.
pub const ROUTE_GENERATION_FAILED_MESSAGE: &str =
    "Failed to generate a route. Please try again.";

/// Maximum number of autocomplete suggestions returned per query.
pub const MAX_ADDRESS_SUGGESTIONS: usize = 5;
