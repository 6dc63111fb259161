//! GeoJSON view of a generated route, ready for a tile-map widget.

use crate::models::{AddressedPoint, RouteResult};
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, JsonValue, Value};

/// The route line followed by start, waypoint and goal markers.
///
/// Every feature carries a `kind` property (`route`, `start`, `waypoint`,
/// `goal`); markers also carry their `address` label.
pub fn route_to_feature_collection(result: &RouteResult) -> FeatureCollection {
    let mut features = Vec::with_capacity(result.waypoints.len() + 3);

    let mut line_props = JsonObject::new();
    line_props.insert("kind".to_string(), JsonValue::from("route"));
    line_props.insert("route_id".to_string(), JsonValue::from(result.id.to_string()));
    line_props.insert(
        "transport_mode".to_string(),
        JsonValue::from(result.transport_mode.to_string()),
    );
    line_props.insert(
        "distance_meters".to_string(),
        JsonValue::from(result.distance_meters),
    );
    line_props.insert(
        "duration_seconds".to_string(),
        JsonValue::from(result.duration_seconds),
    );

    features.push(feature(
        Value::LineString(result.route.iter().map(|c| c.to_position()).collect()),
        line_props,
    ));

    features.push(marker(&result.start_point, "start"));
    features.extend(result.waypoints.iter().map(|wp| marker(wp, "waypoint")));
    features.push(marker(&result.end_point, "goal"));

    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}

fn marker(point: &AddressedPoint, kind: &str) -> Feature {
    let mut props = JsonObject::new();
    props.insert("kind".to_string(), JsonValue::from(kind));
    props.insert("address".to_string(), JsonValue::from(point.address.clone()));
    feature(Value::Point(point.coordinates.to_position()), props)
}

fn feature(value: Value, properties: JsonObject) -> Feature {
    Feature {
        bbox: None,
        geometry: Some(Geometry::new(value)),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Coordinates, TransportMode};
    use uuid::Uuid;

    fn sample_result() -> RouteResult {
        let start = Coordinates { lat: 35.0, lng: 139.0 };
        let waypoint = Coordinates { lat: 35.01, lng: 139.0 };
        let end = Coordinates { lat: 35.01, lng: 139.01 };
        RouteResult {
            id: Uuid::new_v4(),
            start_point: AddressedPoint::new(start, "東京"),
            end_point: AddressedPoint::new(end, "Goal"),
            waypoints: vec![AddressedPoint::new(waypoint, "Waypoint 1")],
            route: vec![start, waypoint, end],
            distance_meters: 2000.0,
            duration_seconds: 2000.0 / 1.4,
            transport_mode: TransportMode::Walking,
        }
    }

    #[test]
    fn one_line_and_one_marker_per_point() {
        let collection = route_to_feature_collection(&sample_result());
        // line + start + 1 waypoint + goal
        assert_eq!(collection.features.len(), 4);
    }

    #[test]
    fn serialized_shape() {
        let json = serde_json::to_value(route_to_feature_collection(&sample_result())).unwrap();

        assert_eq!(json["type"], "FeatureCollection");
        let line = &json["features"][0];
        assert_eq!(line["geometry"]["type"], "LineString");
        assert_eq!(line["geometry"]["coordinates"][0][0], 139.0);
        assert_eq!(line["geometry"]["coordinates"][0][1], 35.0);
        assert_eq!(line["properties"]["kind"], "route");
        assert_eq!(line["properties"]["transport_mode"], "walking");

        assert_eq!(json["features"][1]["properties"]["kind"], "start");
        assert_eq!(json["features"][1]["properties"]["address"], "東京");
        assert_eq!(json["features"][2]["properties"]["kind"], "waypoint");
        assert_eq!(json["features"][3]["properties"]["kind"], "goal");
        assert_eq!(json["features"][3]["geometry"]["type"], "Point");
    }
}
