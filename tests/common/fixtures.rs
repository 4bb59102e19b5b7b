//! Relay fixtures

use chat_relay::config::Config;
use chat_relay::core::backend::CompletionClient;
use chat_relay::core::cache::CacheAdapter;
use chat_relay::core::context::ContextStore;
use chat_relay::core::orchestrator::{ChatOrchestrator, ChatRequest, ChatStreamEvent};
use chat_relay::monitoring::MetricsLog;
use chat_relay::storage::MemoryStore;
use futures::StreamExt;
use std::sync::Arc;
use std::time::Duration;

/// Relay configuration pointed at a test backend
pub fn relay_config(base_url: &str) -> Config {
    let mut config = Config::default();
    config.gateway.backend.base_url = base_url.to_string();
    config.gateway.backend.request_timeout = 2;
    config.gateway.backend.stream_timeout = 2;
    config.gateway.cache.replay_delay_ms = 0;
    config
}

/// Orchestrator over a real HTTP client and an in-memory store
pub struct TestRelay {
    pub orchestrator: ChatOrchestrator,
    pub store: MemoryStore,
    pub config: Config,
}

impl TestRelay {
    pub fn new(base_url: &str) -> Self {
        Self::with_config(relay_config(base_url))
    }

    pub fn with_config(config: Config) -> Self {
        let store = MemoryStore::new();
        let client = CompletionClient::new(config.backend().clone())
            .expect("completion client");
        let orchestrator = ChatOrchestrator::new(
            Arc::new(ContextStore::new(config.context().clone())),
            CacheAdapter::new(Arc::new(store.clone()), config.cache().clone()),
            Arc::new(client),
            Arc::new(MetricsLog::new()),
        );
        Self {
            orchestrator,
            store,
            config,
        }
    }

    /// Collect every event of a streamed request
    pub async fn stream(&self, request: ChatRequest) -> Vec<ChatStreamEvent> {
        self.orchestrator
            .handle_chat_stream_request(request.streaming(true))
            .collect()
            .await
    }

    /// Wait until the answer for `message` is in the cache
    pub async fn wait_until_cached(&self, message: &str) -> bool {
        let cache = self.orchestrator.cache();
        let key = cache.make_key(message);
        for _ in 0..100 {
            if cache.get(&key).await.is_some() {
                return true;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        false
    }
}

/// Cumulative texts of the chunk events, in order
pub fn chunk_texts(events: &[ChatStreamEvent]) -> Vec<String> {
    events
        .iter()
        .filter_map(|event| match event {
            ChatStreamEvent::Chunk { chunk, .. } => Some(chunk.clone()),
            ChatStreamEvent::Error { .. } => None,
        })
        .collect()
}
