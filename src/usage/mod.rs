//! Per-day counter of remote geocoding attempts.
//!
//! Each calendar day gets its own key, so the count resets implicitly when the
//! date changes. Stale keys expire on their own in both backends.

pub mod memory;
pub mod redis;

pub use self::memory::MemoryUsageCounter;
pub use self::redis::RedisUsageCounter;

use crate::constants::USAGE_KEY_PREFIX;
use crate::error::Result;
use async_trait::async_trait;
use time::{Date, OffsetDateTime};

#[async_trait]
pub trait UsageCounter: Send + Sync {
    /// Attempts recorded for `date` (0 when nothing was recorded)
    async fn get(&self, date: Date) -> Result<u32>;

    /// Record one attempt for `date`, returning the new count
    async fn increment(&self, date: Date) -> Result<u32>;

    async fn health_check(&self) -> bool;

    fn backend_name(&self) -> &'static str;
}

/// Storage key for a day's counter, e.g. `google_maps_api_usage_Mon Oct 19 2026`
pub fn usage_key(date: Date) -> String {
    let weekday = date.weekday().to_string();
    let month = date.month().to_string();
    format!(
        "{}{} {} {:02} {}",
        USAGE_KEY_PREFIX,
        &weekday[..3],
        &month[..3],
        date.day(),
        date.year()
    )
}

/// Today's date in UTC
pub fn today() -> Date {
    OffsetDateTime::now_utc().date()
}
