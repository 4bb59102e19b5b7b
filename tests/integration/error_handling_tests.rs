//! Error mapping for backend failures

#[cfg(test)]
mod tests {
    use crate::common::{MockCompletionService, TestRelay};
    use actix_web::ResponseError;
    use chat_relay::core::backend::BackendError;
    use chat_relay::core::orchestrator::{ChatRequest, ChatStreamEvent};
    use chat_relay::utils::error::GatewayError;
    use std::time::Duration;

    #[tokio::test]
    async fn test_model_missing_is_reported() {
        let backend = MockCompletionService::start().await;
        backend.fail(404, "model 'llama3.2:1b' not found").await;
        let relay = TestRelay::new(&backend.uri());

        let failure = relay
            .orchestrator
            .handle_chat_request(ChatRequest::new("hi").session("s1"))
            .await
            .unwrap_err();

        match &failure.error {
            GatewayError::Backend(BackendError::Api { status, message }) => {
                assert_eq!(*status, 404);
                assert!(message.contains("not found"));
            }
            other => panic!("unexpected error {:?}", other),
        }
        assert_eq!(failure.error.status_code().as_u16(), 502);
        assert_eq!(failure.metadata.session_id, "s1");
        assert_eq!(relay.orchestrator.metrics_snapshot().errors, 1);
    }

    #[tokio::test]
    async fn test_timeout_maps_to_gateway_timeout() {
        let backend = MockCompletionService::start().await;
        backend.reply_slowly("too late", Duration::from_secs(5)).await;
        let relay = TestRelay::new(&backend.uri());

        let failure = relay
            .orchestrator
            .handle_chat_request(ChatRequest::new("hi"))
            .await
            .unwrap_err();
        assert!(matches!(
            failure.error,
            GatewayError::Backend(BackendError::Timeout { .. })
        ));
        assert_eq!(failure.error.status_code().as_u16(), 504);
        assert_eq!(failure.error.code(), "BACKEND_TIMEOUT");
    }

    #[tokio::test]
    async fn test_unreachable_backend() {
        let relay = TestRelay::new("http://127.0.0.1:1");

        let failure = relay
            .orchestrator
            .handle_chat_request(ChatRequest::new("hi"))
            .await
            .unwrap_err();
        assert!(matches!(
            failure.error,
            GatewayError::Backend(BackendError::Unreachable { .. })
        ));
        assert_eq!(failure.error.status_code().as_u16(), 503);

        let events = relay.stream(ChatRequest::new("hi").session("s2")).await;
        assert_eq!(events.len(), 1);
        match &events[0] {
            ChatStreamEvent::Error { session_id, .. } => assert_eq!(session_id, "s2"),
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_invalid_input_never_reaches_backend() {
        let backend = MockCompletionService::start().await;
        backend.reply("unused").await;
        let relay = TestRelay::new(&backend.uri());

        let too_long = "x".repeat(10_001);
        let failure = relay
            .orchestrator
            .handle_chat_request(ChatRequest::new(too_long))
            .await
            .unwrap_err();

        assert!(matches!(failure.error, GatewayError::Validation(_)));
        assert_eq!(failure.error.status_code().as_u16(), 400);
        assert!(backend.generate_requests().await.is_empty());
        assert_eq!(relay.orchestrator.metrics_snapshot().total_requests, 0);
    }
}
