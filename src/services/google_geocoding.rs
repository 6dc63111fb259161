use crate::config::GeocodingConfig;
use crate::models::Coordinates;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

/// Ways a remote lookup can fail. None of these reach the caller of the
/// geocoder; they only decide which warning gets logged before the fallback.
#[derive(Debug, Error)]
pub enum GeocodingError {
    #[error("Geocoding client could not be built: {0}")]
    ClientBuild(String),

    #[error("Geocoding request failed: {0}")]
    RequestFailed(String),

    #[error("Geocoding request timed out")]
    Timeout,

    #[error("Geocoding HTTP error {status}")]
    Http { status: u16 },

    #[error("Geocoding parse error: {0}")]
    ParseError(String),

    #[error("Geocoding quota exceeded")]
    QuotaExceeded,

    #[error("Geocoding request denied: {0}")]
    RequestDenied(String),

    #[error("Address not found (status {0})")]
    NoResults(String),

    #[error("Geocoding failed with status {0}")]
    UnexpectedStatus(String),
}

/// Client for the Google Geocoding JSON API
#[derive(Clone)]
pub struct GoogleGeocodingClient {
    client: Client,
    api_key: String,
    base_url: String,
    language: String,
    region: String,
}

impl GoogleGeocodingClient {
    /// Build a client from configuration. Returns `Ok(None)` when no
    /// credential is configured.
    pub fn from_config(config: &GeocodingConfig) -> Result<Option<Self>, GeocodingError> {
        match config.api_key {
            Some(ref api_key) => Self::with_config(api_key.clone(), config).map(Some),
            None => Ok(None),
        }
    }

    pub fn with_config(api_key: String, config: &GeocodingConfig) -> Result<Self, GeocodingError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| GeocodingError::ClientBuild(e.to_string()))?;

        Ok(GoogleGeocodingClient {
            client,
            api_key,
            base_url: config.base_url.clone(),
            language: config.language.clone(),
            region: config.region.clone(),
        })
    }

    /// Resolve an address to the first result's location
    pub async fn geocode(&self, address: &str) -> Result<Coordinates, GeocodingError> {
        tracing::debug!(address, "Geocoding API request");

        let response = self
            .client
            .get(&self.base_url)
            .header("Accept", "application/json")
            .query(&[
                ("address", address),
                ("key", self.api_key.as_str()),
                ("language", self.language.as_str()),
                ("region", self.region.as_str()),
            ])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GeocodingError::Timeout
                } else {
                    GeocodingError::RequestFailed(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            return Err(GeocodingError::Http {
                status: response.status().as_u16(),
            });
        }

        let body: GeocodeApiResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                GeocodingError::Timeout
            } else {
                GeocodingError::ParseError(e.to_string())
            }
        })?;

        body.into_coordinates()
    }
}

// Google API response types

#[derive(Debug, Deserialize)]
struct GeocodeApiResponse {
    status: String,
    #[serde(default)]
    results: Vec<GeocodeApiResult>,
    #[serde(default)]
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeocodeApiResult {
    geometry: GeocodeApiGeometry,
}

#[derive(Debug, Deserialize)]
struct GeocodeApiGeometry {
    location: GeocodeApiLocation,
}

#[derive(Debug, Deserialize)]
struct GeocodeApiLocation {
    lat: f64,
    lng: f64,
}

impl GeocodeApiResponse {
    fn into_coordinates(self) -> Result<Coordinates, GeocodingError> {
        match self.status.as_str() {
            "OK" => self
                .results
                .into_iter()
                .next()
                .map(|result| Coordinates {
                    lat: result.geometry.location.lat,
                    lng: result.geometry.location.lng,
                })
                .ok_or_else(|| GeocodingError::NoResults(self.status.clone())),
            "OVER_QUERY_LIMIT" => Err(GeocodingError::QuotaExceeded),
            "REQUEST_DENIED" => Err(GeocodingError::RequestDenied(
                self.error_message.unwrap_or_default(),
            )),
            "ZERO_RESULTS" => Err(GeocodingError::NoResults(self.status.clone())),
            _ => Err(GeocodingError::UnexpectedStatus(self.status.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Result<Coordinates, GeocodingError> {
        serde_json::from_str::<GeocodeApiResponse>(json)
            .unwrap()
            .into_coordinates()
    }

    #[test]
    fn ok_uses_first_result() {
        let coords = parse(
            r#"{"status":"OK","results":[
                {"geometry":{"location":{"lat":35.68,"lng":139.76}}},
                {"geometry":{"location":{"lat":1.0,"lng":2.0}}}
            ]}"#,
        )
        .unwrap();
        assert_eq!(coords, Coordinates { lat: 35.68, lng: 139.76 });
    }

    #[test]
    fn ok_without_results_is_not_found() {
        assert!(matches!(
            parse(r#"{"status":"OK","results":[]}"#),
            Err(GeocodingError::NoResults(_))
        ));
    }

    #[test]
    fn status_kinds_are_distinguished() {
        assert!(matches!(
            parse(r#"{"status":"OVER_QUERY_LIMIT"}"#),
            Err(GeocodingError::QuotaExceeded)
        ));
        assert!(matches!(
            parse(r#"{"status":"REQUEST_DENIED","error_message":"bad key"}"#),
            Err(GeocodingError::RequestDenied(ref m)) if m == "bad key"
        ));
        assert!(matches!(
            parse(r#"{"status":"ZERO_RESULTS","results":[]}"#),
            Err(GeocodingError::NoResults(_))
        ));
        assert!(matches!(
            parse(r#"{"status":"UNKNOWN_ERROR"}"#),
            Err(GeocodingError::UnexpectedStatus(ref s)) if s == "UNKNOWN_ERROR"
        ));
    }

    #[test]
    fn from_config_without_key_is_none() {
        let config = GeocodingConfig::default();
        assert!(GoogleGeocodingClient::from_config(&config).unwrap().is_none());
    }

    #[test]
    fn from_config_with_key_is_some() {
        let config = GeocodingConfig {
            api_key: Some("test-key".to_string()),
            ..GeocodingConfig::default()
        };
        let client = GoogleGeocodingClient::from_config(&config).unwrap().unwrap();
        assert_eq!(client.api_key, "test-key");
        assert_eq!(client.language, "ja");
        assert_eq!(client.region, "jp");
    }
}
