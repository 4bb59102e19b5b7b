//! Redis cache operations

use super::pool::RedisPool;
use crate::core::traits::KeyValueStore;
use crate::utils::error::Result;
use async_trait::async_trait;
use redis::AsyncCommands;
use std::sync::atomic::Ordering;

#[async_trait]
impl KeyValueStore for RedisPool {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.connection()?;
        let value: Option<String> = conn.get(key).await.map_err(|e| self.record_failure(e))?;
        self.record_success();
        Ok(value)
    }

    async fn set_ex(&self, key: &str, ttl_seconds: u64, value: &str) -> Result<()> {
        let mut conn = self.connection()?;
        let _: () = conn
            .set_ex(key, value, ttl_seconds)
            .await
            .map_err(|e| self.record_failure(e))?;
        self.record_success();
        Ok(())
    }

    async fn flush_all(&self) -> Result<()> {
        let mut conn = self.connection()?;
        let _: () = redis::cmd("FLUSHALL")
            .query_async(&mut conn)
            .await
            .map_err(|e| self.record_failure(e))?;
        self.record_success();
        Ok(())
    }

    fn is_connected(&self) -> bool {
        !self.is_noop() && self.connected.load(Ordering::SeqCst)
    }

    fn name(&self) -> &'static str {
        "redis"
    }
}
