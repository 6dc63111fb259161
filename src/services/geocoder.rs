use crate::models::Coordinates;
use crate::services::fallback_table;
use crate::services::google_geocoding::GoogleGeocodingClient;
use crate::usage::{self, MemoryUsageCounter, UsageCounter};
use std::sync::Arc;
use time::Date;

/// Address to coordinates, always succeeding.
///
/// The remote service is tried first when a credential is configured and the
/// day's attempt budget is not used up. Every remote failure falls back to the
/// offline table, which in turn falls back to Tokyo Station.
pub struct Geocoder {
    remote: Option<GoogleGeocodingClient>,
    usage_counter: Arc<dyn UsageCounter>,
    daily_limit: u32,
}

impl Geocoder {
    pub fn new(
        remote: Option<GoogleGeocodingClient>,
        usage_counter: Arc<dyn UsageCounter>,
        daily_limit: u32,
    ) -> Self {
        Geocoder {
            remote,
            usage_counter,
            daily_limit,
        }
    }

    /// Table-only geocoder, never touches the network
    pub fn offline() -> Self {
        Self::new(None, Arc::new(MemoryUsageCounter::new()), 0)
    }

    pub fn usage_counter(&self) -> &Arc<dyn UsageCounter> {
        &self.usage_counter
    }

    pub fn daily_limit(&self) -> u32 {
        self.daily_limit
    }

    pub async fn geocode(&self, address: &str) -> Coordinates {
        self.geocode_on(address, usage::today()).await
    }

    /// Geocode, charging any remote attempt to `date`'s budget
    pub async fn geocode_on(&self, address: &str, date: Date) -> Coordinates {
        if let Some(ref client) = self.remote {
            if self.reserve_remote_attempt(date).await {
                match client.geocode(address).await {
                    Ok(coords) => {
                        tracing::info!(
                            address,
                            lat = coords.lat,
                            lng = coords.lng,
                            "Geocoded \"{}\" to ({}, {})",
                            address,
                            coords.lat,
                            coords.lng
                        );
                        return coords;
                    }
                    Err(e) => {
                        tracing::warn!(
                            address,
                            error = %e,
                            "Geocoding API failed, using fallback table"
                        );
                    }
                }
            }
        }

        fallback_table::resolve(address)
    }

    /// Count one remote attempt against the day's budget. Returns false when
    /// the budget is spent or the counter is unreachable.
    async fn reserve_remote_attempt(&self, date: Date) -> bool {
        let used = match self.usage_counter.get(date).await {
            Ok(used) => used,
            Err(e) => {
                tracing::warn!(error = %e, "Usage counter unavailable, skipping remote geocoding");
                return false;
            }
        };

        if used >= self.daily_limit {
            tracing::warn!(
                used,
                limit = self.daily_limit,
                "Daily geocoding limit reached, using fallback"
            );
            return false;
        }

        match self.usage_counter.increment(date).await {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to record geocoding usage, skipping remote geocoding");
                false
            }
        }
    }
}
