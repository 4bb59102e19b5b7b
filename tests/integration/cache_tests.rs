//! Cache behavior across requests

#[cfg(test)]
mod tests {
    use crate::common::fixtures::relay_config;
    use crate::common::{MockCompletionService, TestRelay};
    use chat_relay::core::cache::{CacheLookup, make_key};
    use chat_relay::core::orchestrator::ChatRequest;

    #[tokio::test]
    async fn test_unreachable_store_degrades_to_live_generation() {
        let backend = MockCompletionService::start().await;
        backend.reply("live").await;
        let relay = TestRelay::new(&backend.uri());
        relay.store.set_available(false);

        for _ in 0..2 {
            let response = relay
                .orchestrator
                .handle_chat_request(ChatRequest::new("same question"))
                .await
                .unwrap();
            assert!(!response.metadata.cached);
        }
        assert_eq!(backend.generate_requests().await.len(), 2);

        let key = relay.orchestrator.cache().make_key("same question");
        assert_eq!(
            relay.orchestrator.cache().lookup(&key).await,
            CacheLookup::BackendUnavailable
        );
    }

    #[tokio::test]
    async fn test_store_recovery_resumes_caching() {
        let backend = MockCompletionService::start().await;
        backend.reply("back again").await;
        let relay = TestRelay::new(&backend.uri());

        relay.store.set_available(false);
        relay
            .orchestrator
            .handle_chat_request(ChatRequest::new("q"))
            .await
            .unwrap();

        relay.store.set_available(true);
        relay
            .orchestrator
            .handle_chat_request(ChatRequest::new("q"))
            .await
            .unwrap();
        assert!(relay.wait_until_cached("q").await);
    }

    #[tokio::test]
    async fn test_clear_cache_is_whole_namespace() {
        let backend = MockCompletionService::start().await;
        backend.reply("x").await;
        let relay = TestRelay::new(&backend.uri());

        for message in ["a", "b", "c"] {
            relay
                .orchestrator
                .handle_chat_request(ChatRequest::new(message))
                .await
                .unwrap();
            assert!(relay.wait_until_cached(message).await);
        }

        assert!(relay.orchestrator.clear_cache().await);
        for message in ["a", "b", "c"] {
            let key = relay.orchestrator.cache().make_key(message);
            assert!(relay.orchestrator.cache().get(&key).await.is_none());
        }
    }

    #[tokio::test]
    async fn test_custom_prefix_and_length() {
        let backend = MockCompletionService::start().await;
        let mut config = relay_config(&backend.uri());
        config.gateway.cache.key_prefix = "relay-test:".to_string();
        config.gateway.cache.key_length = 8;
        let relay = TestRelay::with_config(config);

        let key = relay.orchestrator.cache().make_key("a fairly long message");
        assert_eq!(key, make_key("relay-test:", 8, "a fairly long message"));
        assert_eq!(key.len(), "relay-test:".len() + 8);
    }
}
