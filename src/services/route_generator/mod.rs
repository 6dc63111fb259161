pub mod geometry;
mod waypoints;

pub use geometry::{build_route, total_distance};
pub use waypoints::synthesize_waypoints;

use waypoints::unit;

use crate::config::RouteGeneratorConfig;
use crate::constants::{GOAL_LABEL, ROUTE_GENERATION_FAILED_MESSAGE, WAYPOINT_LABEL_PREFIX};
use crate::error::{AppError, Result};
use crate::models::{AddressedPoint, Coordinates, RouteRequest, RouteResult, TransportMode};
use crate::services::geocoder::Geocoder;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Mutex;
use uuid::Uuid;

/// Builds a random route from a start address.
///
/// Holds its own seedable random source so that tests can pin the geometry.
/// The lock is only ever held across synchronous synthesis.
pub struct RouteGenerator {
    geocoder: Geocoder,
    config: RouteGeneratorConfig,
    rng: Mutex<StdRng>,
}

impl RouteGenerator {
    pub fn new(geocoder: Geocoder, config: RouteGeneratorConfig) -> Self {
        Self::with_seed(geocoder, config, rand::random())
    }

    pub fn with_seed(geocoder: Geocoder, config: RouteGeneratorConfig, seed: u64) -> Self {
        RouteGenerator {
            geocoder,
            config,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn geocoder(&self) -> &Geocoder {
        &self.geocoder
    }

    pub fn config(&self) -> &RouteGeneratorConfig {
        &self.config
    }

    /// Geocode the start, scatter waypoints, and assemble the result.
    ///
    /// Any failure is logged and reported as a single generic
    /// `AppError::RouteGeneration`; no partial result is returned.
    pub async fn generate_route(&self, request: &RouteRequest) -> Result<RouteResult> {
        self.try_generate_route(request).await.map_err(|e| {
            tracing::error!(
                error = %e,
                start_address = %request.start_address,
                "Route generation failed"
            );
            AppError::RouteGeneration(ROUTE_GENERATION_FAILED_MESSAGE.to_string())
        })
    }

    async fn try_generate_route(&self, request: &RouteRequest) -> Result<RouteResult> {
        let mode = request.transport_mode;
        let speed_mps = self.config.speed_mps(mode);

        let start = self.geocoder.geocode(&request.start_address).await;

        let target_distance_m = speed_mps * request.duration_minutes as f64 * 60.0;
        let (waypoints, end) = self.synthesize(start, target_distance_m)?;

        let route = build_route(start, &waypoints, end);
        let distance_meters = total_distance(&route);
        let duration_seconds = distance_meters / speed_mps;

        tracing::info!(
            mode = %mode,
            waypoints = waypoints.len(),
            distance_m = %format!("{:.0}", distance_meters),
            requested_min = request.duration_minutes,
            estimated_min = %format!("{:.1}", duration_seconds / 60.0),
            "Generated {} route: {:.2}km through {} waypoints",
            mode,
            distance_meters / 1000.0,
            waypoints.len()
        );

        Ok(assemble_result(
            request,
            start,
            &waypoints,
            end,
            route,
            distance_meters,
            duration_seconds,
            mode,
        ))
    }

    /// Waypoints plus a goal point jittered around the last one
    fn synthesize(
        &self,
        start: Coordinates,
        target_distance_m: f64,
    ) -> Result<(Vec<Coordinates>, Coordinates)> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|_| AppError::Internal("Random source lock poisoned".to_string()))?;

        let waypoints = synthesize_waypoints(&mut *rng, start, target_distance_m);
        let last = *waypoints.last().ok_or_else(|| {
            AppError::RouteGeneration("Waypoint synthesis returned no waypoints".to_string())
        })?;

        let jitter = self.config.end_point_jitter_deg;
        let end = Coordinates {
            lat: last.lat + (unit(&mut *rng) - 0.5) * 2.0 * jitter,
            lng: last.lng + (unit(&mut *rng) - 0.5) * 2.0 * jitter,
        };

        Ok((waypoints, end))
    }
}

#[allow(clippy::too_many_arguments)]
fn assemble_result(
    request: &RouteRequest,
    start: Coordinates,
    waypoints: &[Coordinates],
    end: Coordinates,
    route: Vec<Coordinates>,
    distance_meters: f64,
    duration_seconds: f64,
    transport_mode: TransportMode,
) -> RouteResult {
    let waypoints = waypoints
        .iter()
        .enumerate()
        .map(|(i, coords)| {
            AddressedPoint::new(*coords, format!("{} {}", WAYPOINT_LABEL_PREFIX, i + 1))
        })
        .collect();

    RouteResult {
        id: Uuid::new_v4(),
        start_point: AddressedPoint::new(start, request.start_address.clone()),
        end_point: AddressedPoint::new(end, GOAL_LABEL),
        waypoints,
        route,
        distance_meters,
        duration_seconds,
        transport_mode,
    }
}
