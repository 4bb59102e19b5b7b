//! Single-shot chat flow tests

#[cfg(test)]
mod tests {
    use crate::common::{MockCompletionService, TestRelay};
    use chat_relay::core::orchestrator::ChatRequest;
    use tokio_test::assert_ok;

    #[tokio::test]
    async fn test_cold_cache_then_hit() {
        let backend = MockCompletionService::start().await;
        backend
            .reply("React is a JavaScript library for building user interfaces.")
            .await;
        let relay = TestRelay::new(&backend.uri());

        let request = ChatRequest::new("What is React?").session("react");
        let first = assert_ok!(relay.orchestrator.handle_chat_request(request.clone()).await);
        assert!(!first.metadata.cached);
        assert!(relay.wait_until_cached("What is React?").await);

        let second = assert_ok!(relay.orchestrator.handle_chat_request(request).await);
        assert!(second.metadata.cached);
        assert_eq!(second.response, first.response);
        assert_eq!(backend.generate_requests().await.len(), 1);
    }

    #[tokio::test]
    async fn test_cache_key_ignores_case_and_padding() {
        let backend = MockCompletionService::start().await;
        backend.reply("Yes.").await;
        let relay = TestRelay::new(&backend.uri());

        relay
            .orchestrator
            .handle_chat_request(ChatRequest::new("Is Rust fast?"))
            .await
            .unwrap();
        assert!(relay.wait_until_cached("Is Rust fast?").await);

        let again = relay
            .orchestrator
            .handle_chat_request(ChatRequest::new("  is rust FAST?  "))
            .await
            .unwrap();
        assert!(again.metadata.cached);
    }

    #[tokio::test]
    async fn test_prompt_carries_recent_history_only() {
        let backend = MockCompletionService::start().await;
        backend.reply("noted").await;
        let relay = TestRelay::new(&backend.uri());

        for i in 1..=5 {
            relay
                .orchestrator
                .handle_chat_request(
                    ChatRequest::new(format!("fact number {}", i))
                        .session("facts")
                        .use_cache(false),
                )
                .await
                .unwrap();
        }

        let prompts = backend.prompts().await;
        assert_eq!(prompts.len(), 5);

        let first = &prompts[0];
        assert!(!first.contains("CONTEXT START"));
        assert!(first.ends_with("User: fact number 1\nAssistant:"));

        let last = &prompts[4];
        assert!(last.contains("CONTEXT START"));
        assert!(!last.contains("User: fact number 1\n"));
        assert!(last.contains("User: fact number 2\n"));
        assert!(last.contains("User: fact number 4\n"));
        assert!(last.ends_with("User: fact number 5\nAssistant:"));
    }

    #[tokio::test]
    async fn test_sessions_do_not_share_history() {
        let backend = MockCompletionService::start().await;
        backend.reply("ok").await;
        let relay = TestRelay::new(&backend.uri());

        relay
            .orchestrator
            .handle_chat_request(ChatRequest::new("alpha secret").session("a").use_cache(false))
            .await
            .unwrap();
        relay
            .orchestrator
            .handle_chat_request(ChatRequest::new("hello").session("b").use_cache(false))
            .await
            .unwrap();

        let prompts = backend.prompts().await;
        assert!(!prompts[1].contains("alpha secret"));
    }

    #[tokio::test]
    async fn test_request_carries_sampling_options() {
        let backend = MockCompletionService::start().await;
        backend.reply("ok").await;
        let relay = TestRelay::new(&backend.uri());

        relay
            .orchestrator
            .handle_chat_request(ChatRequest::new("hi"))
            .await
            .unwrap();

        let body = &backend.generate_requests().await[0];
        assert_eq!(body["model"], "llama3.2:1b");
        assert_eq!(body["stream"], false);
        assert_eq!(body["options"]["num_predict"], 150);
        assert_eq!(
            body["options"]["stop"],
            serde_json::json!(["User:", "\nUser:", "Human:"])
        );
    }

    #[tokio::test]
    async fn test_metrics_follow_requests() {
        let backend = MockCompletionService::start().await;
        backend.reply("answer").await;
        let relay = TestRelay::new(&backend.uri());

        relay
            .orchestrator
            .handle_chat_request(ChatRequest::new("q1"))
            .await
            .unwrap();
        assert!(relay.wait_until_cached("q1").await);
        relay
            .orchestrator
            .handle_chat_request(ChatRequest::new("q1"))
            .await
            .unwrap();

        let snapshot = relay.orchestrator.metrics_snapshot();
        assert_eq!(snapshot.total_requests, 2);
        assert_eq!(snapshot.cache_hits, 1);
        assert_eq!(snapshot.cache_misses, 1);
        assert!((snapshot.cache_hit_rate - 0.5).abs() < 1e-9);
        assert_eq!(snapshot.recent.len(), 2);
        assert_eq!(snapshot.recent[0].message_length, 2);
        assert_eq!(snapshot.recent[0].response_length, 6);
    }
}
