//! Cache configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Response cache configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Enable response caching
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Cache TTL in seconds
    #[serde(default = "default_cache_ttl")]
    pub ttl: u64,
    /// Namespace prefix for cache keys
    #[serde(default = "default_key_prefix")]
    pub key_prefix: String,
    /// Number of encoded message characters kept in a key
    #[serde(default = "default_key_length")]
    pub key_length: usize,
    /// Pause between replayed words when a cached answer is streamed
    #[serde(default = "default_replay_delay_ms")]
    pub replay_delay_ms: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            ttl: default_cache_ttl(),
            key_prefix: default_key_prefix(),
            key_length: default_key_length(),
            replay_delay_ms: default_replay_delay_ms(),
        }
    }
}

impl CacheConfig {
    /// Merge cache configurations
    pub fn merge(mut self, other: Self) -> Self {
        if !other.enabled {
            self.enabled = other.enabled;
        }
        if other.ttl != default_cache_ttl() {
            self.ttl = other.ttl;
        }
        if other.key_prefix != default_key_prefix() {
            self.key_prefix = other.key_prefix;
        }
        if other.key_length != default_key_length() {
            self.key_length = other.key_length;
        }
        if other.replay_delay_ms != default_replay_delay_ms() {
            self.replay_delay_ms = other.replay_delay_ms;
        }
        self
    }

    pub fn replay_delay(&self) -> Duration {
        Duration::from_millis(self.replay_delay_ms)
    }
}
