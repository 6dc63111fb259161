use crate::constants::ROUTE_SEGMENT_STEPS;
use crate::models::Coordinates;

/// Straight-line polyline through `start`, each waypoint, then `end`.
///
/// Every leg is split into `ROUTE_SEGMENT_STEPS` equal steps in lat/lng space.
/// Adjacent legs share their boundary point, so the result holds
/// `ROUTE_SEGMENT_STEPS * legs + 1` points with the original endpoints exact.
pub fn build_route(
    start: Coordinates,
    waypoints: &[Coordinates],
    end: Coordinates,
) -> Vec<Coordinates> {
    let mut stops = Vec::with_capacity(waypoints.len() + 2);
    stops.push(start);
    stops.extend_from_slice(waypoints);
    stops.push(end);

    let mut route = Vec::with_capacity(ROUTE_SEGMENT_STEPS * (stops.len() - 1) + 1);
    route.push(start);

    for leg in stops.windows(2) {
        let (from, to) = (leg[0], leg[1]);
        for step in 1..ROUTE_SEGMENT_STEPS {
            route.push(from.lerp(&to, step as f64 / ROUTE_SEGMENT_STEPS as f64));
        }
        route.push(to);
    }

    route
}

/// Total length of a polyline in meters (haversine per segment)
pub fn total_distance(route: &[Coordinates]) -> f64 {
    route.windows(2).map(|w| w[0].distance_to(&w[1])).sum()
}
