//! Redis cache service implementation
//!
//! Thin JSON-over-Redis cache used for availability responses. Values are
//! namespaced with the configured key prefix and expire on a TTL.

use redis::{Client, AsyncCommands};
use serde::{Serialize, Deserialize};
use tracing::debug;
use crate::config::settings::Settings;
use crate::utils::errors::{ClubHubError, Result};

/// Redis-backed cache for computed responses
#[derive(Debug, Clone)]
pub struct CacheService {
    client: Client,
    settings: Settings,
}

impl CacheService {
    /// Create a new CacheService instance
    pub fn new(settings: Settings) -> Result<Self> {
        let client = Client::open(settings.redis.url.as_str())
            .map_err(ClubHubError::Redis)?;

        Ok(Self { client, settings })
    }

    async fn get_connection(&self) -> Result<redis::aio::Connection> {
        self.client.get_async_connection().await
            .map_err(ClubHubError::Redis)
    }

    /// Set a value with TTL; defaults to the configured TTL
    pub async fn set<T>(&self, key: &str, value: &T, ttl_seconds: Option<u64>) -> Result<()>
    where
        T: Serialize,
    {
        let mut conn = self.get_connection().await?;
        let serialized = serde_json::to_string(value)
            .map_err(ClubHubError::Serialization)?;

        let full_key = format!("{}{}", self.settings.redis.prefix, key);
        let ttl = ttl_seconds.unwrap_or(self.settings.redis.ttl_seconds);

        let _: () = conn.set_ex(&full_key, serialized, ttl).await
            .map_err(ClubHubError::Redis)?;

        debug!(key = %full_key, ttl = ttl, "Value set in cache");
        Ok(())
    }

    /// Get a value
    pub async fn get<T>(&self, key: &str) -> Result<Option<T>>
    where
        T: for<'de> Deserialize<'de>,
    {
        let mut conn = self.get_connection().await?;
        let full_key = format!("{}{}", self.settings.redis.prefix, key);

        let result: Option<String> = conn.get(&full_key).await
            .map_err(ClubHubError::Redis)?;

        match result {
            Some(data) => {
                let deserialized = serde_json::from_str::<T>(&data)
                    .map_err(ClubHubError::Serialization)?;
                debug!(key = %full_key, "Cache hit");
                Ok(Some(deserialized))
            }
            None => {
                debug!(key = %full_key, "Cache miss");
                Ok(None)
            }
        }
    }

    /// Delete a key; returns whether a value was removed
    pub async fn delete(&self, key: &str) -> Result<bool> {
        let mut conn = self.get_connection().await?;
        let full_key = format!("{}{}", self.settings.redis.prefix, key);

        let deleted: i32 = conn.del(&full_key).await
            .map_err(ClubHubError::Redis)?;

        debug!(key = %full_key, deleted = deleted > 0, "Cache key deleted");
        Ok(deleted > 0)
    }

    /// Check cache reachability
    pub async fn health_check(&self) -> Result<bool> {
        let mut conn = self.get_connection().await?;
        let pong: String = redis::cmd("PING").query_async(&mut conn).await
            .map_err(ClubHubError::Redis)?;

        Ok(pong == "PONG")
    }
}
