use crate::constants::EARTH_RADIUS_M;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Result<Self, String> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(format!(
                "Invalid latitude: {} (must be between -90 and 90)",
                lat
            ));
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(format!(
                "Invalid longitude: {} (must be between -180 and 180)",
                lng
            ));
        }
        Ok(Coordinates { lat, lng })
    }

    /// Great-circle distance to `other` using the Haversine formula.
    /// Returns distance in meters.
    pub fn distance_to(&self, other: &Coordinates) -> f64 {
        let lat1_rad = self.lat.to_radians();
        let lat2_rad = other.lat.to_radians();
        let delta_lat = (other.lat - self.lat).to_radians();
        let delta_lng = (other.lng - self.lng).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_M * c
    }

    /// Point at `ratio` along the straight lat/lng line towards `other`
    pub fn lerp(&self, other: &Coordinates, ratio: f64) -> Coordinates {
        Coordinates {
            lat: self.lat + (other.lat - self.lat) * ratio,
            lng: self.lng + (other.lng - self.lng) * ratio,
        }
    }

    /// GeoJSON position order: `[lng, lat]`
    pub fn to_position(&self) -> Vec<f64> {
        vec![self.lng, self.lat]
    }
}
