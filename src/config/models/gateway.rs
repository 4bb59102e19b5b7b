//! Main relay configuration

#![allow(missing_docs)]

use super::*;
use serde::{Deserialize, Serialize};

/// Main relay configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RelayConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Completion backend configuration
    #[serde(default)]
    pub backend: BackendConfig,
    /// Response cache configuration
    #[serde(default)]
    pub cache: CacheConfig,
    /// Storage configuration
    #[serde(default)]
    pub storage: StorageConfig,
    /// Conversation context configuration
    #[serde(default)]
    pub context: ContextConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl RelayConfig {
    /// Merge two configurations, with other taking precedence
    pub fn merge(mut self, other: Self) -> Self {
        self.server = self.server.merge(other.server);
        self.backend = self.backend.merge(other.backend);
        self.cache = self.cache.merge(other.cache);
        self.storage = self.storage.merge(other.storage);
        self.context = self.context.merge(other.context);
        self.logging = self.logging.merge(other.logging);
        self
    }
}
