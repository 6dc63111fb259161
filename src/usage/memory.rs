use crate::constants::{USAGE_COUNTER_MAX_ENTRIES, USAGE_KEY_TTL_SECONDS};
use crate::error::Result;
use crate::usage::{usage_key, UsageCounter};
use async_trait::async_trait;
use moka::future::Cache;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;
use time::Date;

/// In-memory counter backed by moka. Each date key holds an atomic, so
/// increments from concurrent requests are never lost.
pub struct MemoryUsageCounter {
    counts: Cache<String, Arc<AtomicU32>>,
}

impl MemoryUsageCounter {
    pub fn new() -> Self {
        let counts = Cache::builder()
            .time_to_live(Duration::from_secs(USAGE_KEY_TTL_SECONDS))
            .max_capacity(USAGE_COUNTER_MAX_ENTRIES)
            .build();

        MemoryUsageCounter { counts }
    }
}

impl Default for MemoryUsageCounter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UsageCounter for MemoryUsageCounter {
    async fn get(&self, date: Date) -> Result<u32> {
        let key = usage_key(date);
        Ok(self
            .counts
            .get(&key)
            .await
            .map(|count| count.load(Ordering::SeqCst))
            .unwrap_or(0))
    }

    async fn increment(&self, date: Date) -> Result<u32> {
        let key = usage_key(date);
        let count = self
            .counts
            .get_with(key.clone(), async { Arc::new(AtomicU32::new(0)) })
            .await;
        let updated = count.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::debug!(key = %key, count = updated, "Geocoding usage incremented");
        Ok(updated)
    }

    async fn health_check(&self) -> bool {
        true
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
