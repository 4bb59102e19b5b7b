//! Storage layer for the relay
//!
//! Key-value stores backing the response cache: Redis when configured and
//! reachable, an in-process store otherwise.

/// In-process store
pub mod memory;
/// Redis store
#[cfg(feature = "redis")]
pub mod redis;

pub use memory::MemoryStore;

use crate::config::RedisConfig;
use crate::core::traits::KeyValueStore;
use std::sync::Arc;
use tracing::info;

/// Pick the store backing the response cache
///
/// A configured Redis that cannot be reached still yields a Redis store, in
/// disconnected mode, so the relay starts and serves uncached answers.
pub async fn create_store(config: &RedisConfig) -> Arc<dyn KeyValueStore> {
    #[cfg(feature = "redis")]
    {
        if config.enabled {
            return Arc::new(redis::RedisPool::connect_or_noop(config).await);
        }
    }

    info!(
        redis_enabled = config.enabled,
        "Using in-memory response store"
    );
    Arc::new(MemoryStore::new())
}
