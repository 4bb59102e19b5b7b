//! Wiremock stand-in for the completion service

use serde_json::{Value, json};
use std::time::Duration;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Completion service double speaking the `/api/generate` protocol
pub struct MockCompletionService {
    server: MockServer,
}

impl MockCompletionService {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Answer single-shot requests with `text`
    pub async fn reply(&self, text: &str) {
        Mock::given(method("POST"))
            .and(path("/api/generate"))
            .and(body_partial_json(json!({"stream": false})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "model": "llama3.2:1b",
                "response": text,
                "done": true
            })))
            .mount(&self.server)
            .await;
    }

    /// Answer single-shot requests after `delay`
    pub async fn reply_slowly(&self, text: &str, delay: Duration) {
        Mock::given(method("POST"))
            .and(path("/api/generate"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"response": text, "done": true}))
                    .set_delay(delay),
            )
            .mount(&self.server)
            .await;
    }

    /// Answer streamed requests with one record per delta, the last one terminal
    pub async fn stream(&self, deltas: &[&str]) {
        let body: String = deltas
            .iter()
            .enumerate()
            .map(|(i, delta)| {
                let record = json!({"response": delta, "done": i + 1 == deltas.len()});
                format!("{}\n", record)
            })
            .collect();
        self.stream_raw(&body).await;
    }

    /// Answer streamed requests with a literal body
    pub async fn stream_raw(&self, body: &str) {
        Mock::given(method("POST"))
            .and(path("/api/generate"))
            .and(body_partial_json(json!({"stream": true})))
            .respond_with(ResponseTemplate::new(200).set_body_raw(body.to_string(), "application/x-ndjson"))
            .mount(&self.server)
            .await;
    }

    /// Reject every request with `status` and a structured error body
    pub async fn fail(&self, status: u16, error: &str) {
        Mock::given(method("POST"))
            .and(path("/api/generate"))
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({"error": error})))
            .mount(&self.server)
            .await;
    }

    /// Bodies of every generate request received so far
    pub async fn generate_requests(&self) -> Vec<Value> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|r| r.url.path() == "/api/generate")
            .filter_map(|r| serde_json::from_slice(&r.body).ok())
            .collect()
    }

    /// Prompts of every generate request received so far
    pub async fn prompts(&self) -> Vec<String> {
        self.generate_requests()
            .await
            .iter()
            .filter_map(|body| body["prompt"].as_str().map(str::to_string))
            .collect()
    }
}
