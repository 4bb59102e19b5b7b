//! Key-value store trait

use crate::utils::error::Result;
use async_trait::async_trait;

/// Minimal string key-value store with per-entry expiry
///
/// Implementations report connectivity through [`is_connected`](Self::is_connected)
/// instead of failing every call when the store is down.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Fetch a value
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store a value that expires after `ttl_seconds`
    async fn set_ex(&self, key: &str, ttl_seconds: u64, value: &str) -> Result<()>;

    /// Drop every key
    async fn flush_all(&self) -> Result<()>;

    /// Whether the store is reachable right now
    fn is_connected(&self) -> bool;

    /// Short name for logs and health output
    fn name(&self) -> &'static str;
}
