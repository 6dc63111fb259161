use crate::constants::{MAX_DURATION_MINUTES, MIN_DURATION_MINUTES};
use crate::models::Coordinates;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    #[default]
    Walking,
    Cycling,
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportMode::Walking => write!(f, "walking"),
            TransportMode::Cycling => write!(f, "cycling"),
        }
    }
}

impl FromStr for TransportMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "walk" | "walking" => Ok(TransportMode::Walking),
            "bike" | "cycling" | "bicycle" => Ok(TransportMode::Cycling),
            _ => Err(format!("Invalid transport mode: '{}'", s)),
        }
    }
}

/// A coordinate with a human-readable label
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AddressedPoint {
    #[serde(flatten)]
    pub coordinates: Coordinates,
    pub address: String,
}

impl AddressedPoint {
    pub fn new(coordinates: Coordinates, address: impl Into<String>) -> Self {
        AddressedPoint {
            coordinates,
            address: address.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteResult {
    pub id: Uuid,
    pub start_point: AddressedPoint,
    pub end_point: AddressedPoint,
    pub waypoints: Vec<AddressedPoint>,
    /// Dense polyline start -> waypoints -> end
    pub route: Vec<Coordinates>,
    pub distance_meters: f64,
    /// Derived from `distance_meters` and the mode's speed, not from the
    /// requested duration
    pub duration_seconds: f64,
    pub transport_mode: TransportMode,
}

// Request/Response types for API endpoints

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteRequest {
    pub duration_minutes: u32,
    pub start_address: String,
    #[serde(default)]
    pub transport_mode: TransportMode,
}

impl RouteRequest {
    pub fn new(
        duration_minutes: u32,
        start_address: impl Into<String>,
        transport_mode: TransportMode,
    ) -> Self {
        RouteRequest {
            duration_minutes,
            start_address: start_address.into(),
            transport_mode,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.start_address.trim().is_empty() {
            return Err("start_address must not be empty".to_string());
        }
        if !(MIN_DURATION_MINUTES..=MAX_DURATION_MINUTES).contains(&self.duration_minutes) {
            return Err(format!(
                "duration_minutes must be between {} and {}",
                MIN_DURATION_MINUTES, MAX_DURATION_MINUTES
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_request_validation() {
        let mut req = RouteRequest::new(30, "東京駅", TransportMode::Walking);
        assert!(req.validate().is_ok());

        req.start_address = "  \u{3000} ".to_string();
        assert!(req.validate().is_err());

        req.start_address = "渋谷".to_string();
        req.duration_minutes = 0;
        assert!(req.validate().is_err());

        req.duration_minutes = 1000;
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_route_request_default_mode() {
        let req: RouteRequest =
            serde_json::from_str(r#"{"duration_minutes": 45, "start_address": "梅田"}"#).unwrap();
        assert_eq!(req.transport_mode, TransportMode::Walking);
        assert_eq!(req.duration_minutes, 45);
    }

    #[test]
    fn test_transport_mode_serde() {
        assert_eq!(
            serde_json::to_string(&TransportMode::Cycling).unwrap(),
            "\"cycling\""
        );
        let mode: TransportMode = serde_json::from_str("\"walking\"").unwrap();
        assert_eq!(mode, TransportMode::Walking);
    }

    #[test]
    fn test_transport_mode_from_str() {
        assert_eq!(
            "WALK".parse::<TransportMode>().unwrap(),
            TransportMode::Walking
        );
        assert_eq!(
            "bicycle".parse::<TransportMode>().unwrap(),
            TransportMode::Cycling
        );
        assert!("teleport".parse::<TransportMode>().is_err());
    }

    #[test]
    fn test_addressed_point_is_flattened() {
        let point = AddressedPoint::new(Coordinates { lat: 1.5, lng: 2.5 }, "Goal");
        let json = serde_json::to_value(&point).unwrap();
        assert_eq!(json["lat"], 1.5);
        assert_eq!(json["lng"], 2.5);
        assert_eq!(json["address"], "Goal");
    }
}
