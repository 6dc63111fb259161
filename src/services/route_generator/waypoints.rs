use crate::constants::{
    MAX_WAYPOINTS, METERS_PER_DEGREE_LAT, MIN_WAYPOINTS, WAYPOINT_RADIUS_JITTER_FRACTION,
};
use crate::models::Coordinates;
use rand::distr::{Distribution, StandardUniform};
use rand::Rng;
use std::f64::consts::TAU;

/// Uniform sample in [0, 1)
pub(super) fn unit<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    StandardUniform.sample(rng)
}

/// Scatter 1-3 waypoints around `start` for a loop of roughly
/// `target_distance_m`.
///
/// The distance is cut into `count + 1` equal segments. Waypoint `i` sits at a
/// random bearing, `segment * (i + 1)` away from the start (±25% of a segment).
/// Offsets are converted with a flat-earth approximation.
pub fn synthesize_waypoints<R: Rng + ?Sized>(
    rng: &mut R,
    start: Coordinates,
    target_distance_m: f64,
) -> Vec<Coordinates> {
    let span = (MAX_WAYPOINTS - MIN_WAYPOINTS + 1) as f64;
    let count = (MIN_WAYPOINTS + (unit(rng) * span) as usize).min(MAX_WAYPOINTS);
    let segment_m = target_distance_m / (count + 1) as f64;
    let lng_scale = METERS_PER_DEGREE_LAT * start.lat.to_radians().cos();

    (0..count)
        .map(|i| {
            let bearing = unit(rng) * TAU;
            let jitter = (unit(rng) - 0.5) * segment_m * WAYPOINT_RADIUS_JITTER_FRACTION;
            let distance_m = segment_m * (i + 1) as f64 + jitter;

            Coordinates {
                lat: start.lat + distance_m * bearing.cos() / METERS_PER_DEGREE_LAT,
                lng: start.lng + distance_m * bearing.sin() / lng_scale,
            }
        })
        .collect()
}
