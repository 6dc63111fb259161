use crate::constants::*;
use crate::models::TransportMode;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub redis_url: Option<String>, // Falls back to the in-memory counter when unset
    pub static_dir: String,
    pub geocoding: GeocodingConfig,
    pub route_generator: RouteGeneratorConfig,
}

#[derive(Debug, Clone)]
pub struct GeocodingConfig {
    /// Remote service credential. `None` means offline lookups only.
    pub api_key: Option<String>,

    pub base_url: String,
    pub language: String,
    pub region: String,

    /// Timeout for a single remote lookup
    pub timeout_secs: u64,

    /// Remote attempts allowed per calendar day
    pub daily_limit: u32,
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: GOOGLE_GEOCODING_BASE_URL.to_string(),
            language: DEFAULT_GEOCODING_LANGUAGE.to_string(),
            region: DEFAULT_GEOCODING_REGION.to_string(),
            timeout_secs: DEFAULT_GEOCODING_TIMEOUT_SECONDS,
            daily_limit: DEFAULT_DAILY_GEOCODING_LIMIT,
        }
    }
}

impl GeocodingConfig {
    pub fn from_env() -> Result<Self, String> {
        let defaults = Self::default();

        let timeout_secs: u64 = env::var("GEOCODING_TIMEOUT_SECS")
            .unwrap_or_else(|_| defaults.timeout_secs.to_string())
            .parse()
            .map_err(|_| "Invalid GEOCODING_TIMEOUT_SECS")?;

        if timeout_secs == 0 {
            return Err("GEOCODING_TIMEOUT_SECS must be greater than 0".to_string());
        }

        Ok(Self {
            // An empty key is treated the same as a missing one
            api_key: env::var("GOOGLE_MAPS_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            base_url: env::var("GEOCODING_BASE_URL").unwrap_or(defaults.base_url),
            language: env::var("GEOCODING_LANGUAGE").unwrap_or(defaults.language),
            region: env::var("GEOCODING_REGION").unwrap_or(defaults.region),
            timeout_secs,
            daily_limit: env::var("GEOCODING_DAILY_LIMIT")
                .unwrap_or_else(|_| defaults.daily_limit.to_string())
                .parse()
                .map_err(|_| "Invalid GEOCODING_DAILY_LIMIT")?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct RouteGeneratorConfig {
    /// Assumed walking speed in m/s, used both to size the loop and to
    /// estimate the duration of the generated route
    pub walking_speed_mps: f64,

    /// Assumed cycling speed in m/s
    pub cycling_speed_mps: f64,

    /// Half-width (degrees) of the random offset between the last waypoint
    /// and the goal point, per axis
    pub end_point_jitter_deg: f64,
}

impl Default for RouteGeneratorConfig {
    fn default() -> Self {
        Self {
            walking_speed_mps: DEFAULT_WALKING_SPEED_MPS,
            cycling_speed_mps: DEFAULT_CYCLING_SPEED_MPS,
            end_point_jitter_deg: DEFAULT_END_POINT_JITTER_DEG,
        }
    }
}

impl RouteGeneratorConfig {
    pub fn from_env() -> Result<Self, String> {
        let defaults = Self::default();

        let config = Self {
            walking_speed_mps: env::var("ROUTE_WALKING_SPEED_MPS")
                .unwrap_or_else(|_| defaults.walking_speed_mps.to_string())
                .parse()
                .map_err(|_| "Invalid ROUTE_WALKING_SPEED_MPS")?,

            cycling_speed_mps: env::var("ROUTE_CYCLING_SPEED_MPS")
                .unwrap_or_else(|_| defaults.cycling_speed_mps.to_string())
                .parse()
                .map_err(|_| "Invalid ROUTE_CYCLING_SPEED_MPS")?,

            end_point_jitter_deg: env::var("ROUTE_END_JITTER_DEG")
                .unwrap_or_else(|_| defaults.end_point_jitter_deg.to_string())
                .parse()
                .map_err(|_| "Invalid ROUTE_END_JITTER_DEG")?,
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        if !(self.walking_speed_mps.is_finite() && self.walking_speed_mps > 0.0) {
            return Err("ROUTE_WALKING_SPEED_MPS must be a positive number".to_string());
        }
        if !(self.cycling_speed_mps.is_finite() && self.cycling_speed_mps > 0.0) {
            return Err("ROUTE_CYCLING_SPEED_MPS must be a positive number".to_string());
        }
        if !(0.0..=1.0).contains(&self.end_point_jitter_deg) {
            return Err("ROUTE_END_JITTER_DEG must be between 0 and 1 degree".to_string());
        }
        Ok(())
    }

    /// Assumed travel speed (m/s) for a transport mode
    pub fn speed_mps(&self, mode: TransportMode) -> f64 {
        match mode {
            TransportMode::Walking => self.walking_speed_mps,
            TransportMode::Cycling => self.cycling_speed_mps,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        dotenv::dotenv().ok();

        Ok(Config {
            host: env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .map_err(|_| "Invalid PORT")?,
            redis_url: env::var("REDIS_URL").ok(),
            static_dir: env::var("STATIC_DIR").unwrap_or_else(|_| DEFAULT_STATIC_DIR.to_string()),
            geocoding: GeocodingConfig::from_env()?,
            route_generator: RouteGeneratorConfig::from_env()?,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
