use crate::constants::USAGE_KEY_TTL_SECONDS;
use crate::error::{AppError, Result};
use crate::usage::{usage_key, UsageCounter};
use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use time::Date;

/// Redis-backed counter, shared by every instance pointed at the same server.
/// `ConnectionManager` is `Arc`-based internally, so `.clone()` is cheap.
pub struct RedisUsageCounter {
    connection: ConnectionManager,
}

impl RedisUsageCounter {
    pub async fn new(redis_url: &str) -> Result<Self> {
        let client = redis::Client::open(redis_url).map_err(|e| {
            AppError::UsageCounter(format!("Failed to create Redis client: {}", e))
        })?;

        let connection = ConnectionManager::new(client)
            .await
            .map_err(|e| AppError::UsageCounter(format!("Failed to connect to Redis: {}", e)))?;

        tracing::info!("Redis usage counter connection established");

        Ok(RedisUsageCounter { connection })
    }
}

#[async_trait]
impl UsageCounter for RedisUsageCounter {
    async fn get(&self, date: Date) -> Result<u32> {
        let key = usage_key(date);
        let mut conn = self.connection.clone();
        let count: Option<u32> = conn
            .get(&key)
            .await
            .map_err(|e| AppError::UsageCounter(format!("Redis GET failed: {}", e)))?;
        Ok(count.unwrap_or(0))
    }

    async fn increment(&self, date: Date) -> Result<u32> {
        let key = usage_key(date);
        let mut conn = self.connection.clone();

        let count: u32 = conn
            .incr(&key, 1u32)
            .await
            .map_err(|e| AppError::UsageCounter(format!("Redis INCR failed: {}", e)))?;

        // Refresh the expiry so yesterday's key disappears on its own
        let _: () = conn
            .expire(&key, USAGE_KEY_TTL_SECONDS as i64)
            .await
            .map_err(|e| AppError::UsageCounter(format!("Redis EXPIRE failed: {}", e)))?;

        tracing::debug!(key = %key, count, "Geocoding usage incremented");
        Ok(count)
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.connection.clone();
        let result: redis::RedisResult<String> = redis::cmd("PING").query_async(&mut conn).await;
        result.is_ok()
    }

    fn backend_name(&self) -> &'static str {
        "redis"
    }
}
