//! Streamed chat flow tests

#[cfg(test)]
mod tests {
    use crate::common::fixtures::chunk_texts;
    use crate::common::{MockCompletionService, TestRelay};
    use chat_relay::core::orchestrator::{ChatRequest, ChatStreamEvent};

    #[tokio::test]
    async fn test_stream_grows_monotonically() {
        let backend = MockCompletionService::start().await;
        backend
            .stream(&["Rust", " is", " a", " systems", " language."])
            .await;
        let relay = TestRelay::new(&backend.uri());

        let events = relay.stream(ChatRequest::new("Describe Rust")).await;
        let texts = chunk_texts(&events);

        assert_eq!(texts.len(), 5);
        for pair in texts.windows(2) {
            assert!(pair[1].starts_with(&pair[0]));
            assert!(pair[1].len() > pair[0].len());
        }
        assert_eq!(texts.last().unwrap(), "Rust is a systems language.");
        assert!(events.last().unwrap().is_complete());
        assert_eq!(events.iter().filter(|e| e.is_complete()).count(), 1);
    }

    #[tokio::test]
    async fn test_streamed_answer_is_cached_and_remembered() {
        let backend = MockCompletionService::start().await;
        backend.stream(&["Forty", "-two."]).await;
        let relay = TestRelay::new(&backend.uri());

        let request = ChatRequest::new("The answer?").session("s1");
        relay.stream(request.clone()).await;

        assert!(relay.wait_until_cached("The answer?").await);
        let history = relay.orchestrator.context().get_context("s1");
        assert_eq!(history.len(), 2);
        assert_eq!(history[1].content(), "Forty-two.");

        let replay = relay.stream(request).await;
        assert_eq!(chunk_texts(&replay), vec!["Forty-two."]);
        match replay.last().unwrap() {
            ChatStreamEvent::Chunk { metadata, .. } => assert!(metadata.cached),
            other => panic!("unexpected event {:?}", other),
        }
        assert_eq!(backend.generate_requests().await.len(), 1);
    }

    #[tokio::test]
    async fn test_cached_answer_replays_word_by_word() {
        let backend = MockCompletionService::start().await;
        backend.reply("one two three").await;
        let relay = TestRelay::new(&backend.uri());

        relay
            .orchestrator
            .handle_chat_request(ChatRequest::new("count"))
            .await
            .unwrap();
        assert!(relay.wait_until_cached("count").await);

        let events = relay.stream(ChatRequest::new("count")).await;
        assert_eq!(
            chunk_texts(&events),
            vec!["one", "one two", "one two three"]
        );
    }

    #[tokio::test]
    async fn test_backend_without_terminal_record() {
        let backend = MockCompletionService::start().await;
        backend
            .stream_raw("{\"response\":\"cut\",\"done\":false}\n{\"response\":\" short\",\"done\":false}\n")
            .await;
        let relay = TestRelay::new(&backend.uri());

        let events = relay.stream(ChatRequest::new("go").session("s1")).await;
        assert_eq!(chunk_texts(&events), vec!["cut", "cut short", "cut short"]);
        assert!(events.last().unwrap().is_complete());
        // Without a terminal record nothing is remembered
        assert_eq!(relay.orchestrator.context().turn_count("s1"), 0);
    }

    #[tokio::test]
    async fn test_malformed_lines_do_not_break_stream() {
        let backend = MockCompletionService::start().await;
        backend
            .stream_raw(
                "{\"response\":\"a\",\"done\":false}\ngarbage\n\n{\"response\":\"b\",\"done\":true}\n",
            )
            .await;
        let relay = TestRelay::new(&backend.uri());

        let events = relay.stream(ChatRequest::new("x")).await;
        assert_eq!(chunk_texts(&events), vec!["a", "ab"]);
        assert!(!events.iter().any(ChatStreamEvent::is_error));
    }

    #[tokio::test]
    async fn test_empty_stream_is_not_remembered() {
        let backend = MockCompletionService::start().await;
        backend.stream_raw("{\"response\":\"\",\"done\":true}\n").await;
        let relay = TestRelay::new(&backend.uri());

        let events = relay.stream(ChatRequest::new("silence").session("s1")).await;
        assert!(events.is_empty());
        assert_eq!(relay.orchestrator.context().turn_count("s1"), 0);
        assert!(!relay.wait_until_cached("silence").await);
    }
}
