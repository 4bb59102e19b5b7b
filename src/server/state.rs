//! Application state shared across HTTP handlers

use crate::config::Config;
use crate::core::backend::CompletionClient;
use crate::core::cache::CacheAdapter;
use crate::core::context::ContextStore;
use crate::core::orchestrator::ChatOrchestrator;
use crate::monitoring::MetricsLog;
use crate::utils::error::Result;
use std::sync::Arc;
use tracing::info;

/// HTTP server state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Relay configuration (shared read-only)
    pub config: Arc<Config>,
    pub orchestrator: ChatOrchestrator,
}

impl AppState {
    pub fn new(config: Config, orchestrator: ChatOrchestrator) -> Self {
        Self {
            config: Arc::new(config),
            orchestrator,
        }
    }

    /// Wire up store, cache, history, backend client and metrics
    pub async fn from_config(config: Config) -> Result<Self> {
        let store = crate::storage::create_store(&config.storage().redis).await;
        info!(
            store = store.name(),
            connected = store.is_connected(),
            "Response store ready"
        );

        let cache = CacheAdapter::new(store, config.cache().clone());
        let context = Arc::new(ContextStore::new(config.context().clone()));
        let backend = Arc::new(CompletionClient::new(config.backend().clone())?);
        let metrics = Arc::new(MetricsLog::new());

        let orchestrator = ChatOrchestrator::new(context, cache, backend, metrics);
        Ok(Self::new(config, orchestrator))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
