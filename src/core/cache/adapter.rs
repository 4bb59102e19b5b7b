//! Fail-soft cache adapter over a key-value store

use super::key::make_key;
use super::types::{CacheLookup, CachedResponse};
use crate::config::CacheConfig;
use crate::core::traits::KeyValueStore;
use std::sync::Arc;
use tracing::{debug, warn};

/// Response cache in front of a [`KeyValueStore`]
#[derive(Clone)]
pub struct CacheAdapter {
    store: Arc<dyn KeyValueStore>,
    config: CacheConfig,
}

impl CacheAdapter {
    pub fn new(store: Arc<dyn KeyValueStore>, config: CacheConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    pub fn store_name(&self) -> &'static str {
        self.store.name()
    }

    /// Whether the store is currently reachable
    pub fn is_available(&self) -> bool {
        self.store.is_connected()
    }

    /// Cache key for a message
    pub fn make_key(&self, message: &str) -> String {
        make_key(&self.config.key_prefix, self.config.key_length, message)
    }

    /// Look a key up, distinguishing a miss from an unreachable store
    pub async fn lookup(&self, key: &str) -> CacheLookup {
        let raw = match self.store.get(key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return CacheLookup::Miss,
            Err(e) => {
                debug!(store = self.store.name(), "Cache lookup failed: {}", e);
                return CacheLookup::BackendUnavailable;
            }
        };

        match serde_json::from_str::<CachedResponse>(&raw) {
            Ok(entry) => CacheLookup::Hit(entry),
            Err(e) => {
                warn!(key, "Discarding undecodable cache entry: {}", e);
                CacheLookup::Miss
            }
        }
    }

    /// Cached answer for a key, if any
    pub async fn get(&self, key: &str) -> Option<CachedResponse> {
        self.lookup(key).await.into_hit()
    }

    /// Store an answer; failures are logged and dropped
    pub async fn set(&self, key: &str, response: &str) {
        let entry = CachedResponse::new(response);
        let encoded = match serde_json::to_string(&entry) {
            Ok(encoded) => encoded,
            Err(e) => {
                warn!("Failed to encode cache entry: {}", e);
                return;
            }
        };

        match self.store.set_ex(key, self.config.ttl, &encoded).await {
            Ok(()) => debug!(key, ttl = self.config.ttl, "Cached response"),
            Err(e) => debug!(key, "Cache write skipped: {}", e),
        }
    }

    /// Store an answer without waiting for the write
    pub fn set_detached(&self, key: String, response: String) {
        let cache = self.clone();
        tokio::spawn(async move {
            cache.set(&key, &response).await;
        });
    }

    /// Flush the whole cache namespace
    pub async fn clear(&self) -> bool {
        match self.store.flush_all().await {
            Ok(()) => true,
            Err(e) => {
                warn!(store = self.store.name(), "Cache clear failed: {}", e);
                false
            }
        }
    }
}

impl std::fmt::Debug for CacheAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CacheAdapter")
            .field("store", &self.store.name())
            .field("config", &self.config)
            .finish()
    }
}
