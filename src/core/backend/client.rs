//! HTTP client for the completion service

use super::error::BackendError;
use super::types::{ByteStream, ErrorBody, GenerateOptions, GenerateRequest, GenerateResponse};
use crate::config::BackendConfig;
use crate::core::traits::CompletionBackend;
use async_trait::async_trait;
use futures::StreamExt;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, warn};

/// Client for a `POST /api/generate` style completion endpoint
#[derive(Debug, Clone)]
pub struct CompletionClient {
    client: Client,
    config: BackendConfig,
}

impl CompletionClient {
    /// Create a new client
    pub fn new(config: BackendConfig) -> Result<Self, BackendError> {
        let client = Client::builder()
            .connect_timeout(config.stream_timeout())
            .build()
            .map_err(|e| BackendError::network(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    /// Fixed request payload for a prompt
    pub fn build_request(&self, prompt: &str, stream: bool) -> GenerateRequest {
        GenerateRequest {
            model: self.config.model.clone(),
            prompt: prompt.to_string(),
            stream,
            options: GenerateOptions {
                temperature: self.config.temperature,
                top_p: self.config.top_p,
                num_predict: self.config.num_predict,
                stop: self.config.stop.clone(),
            },
        }
    }

    /// Single-shot completion
    pub async fn generate(&self, prompt: &str) -> Result<GenerateResponse, BackendError> {
        let url = self.config.generate_url();
        let body = self.build_request(prompt, false);
        debug!(model = %body.model, prompt_chars = prompt.len(), "Sending completion request");

        let response = self
            .client
            .post(&url)
            .timeout(self.config.request_timeout())
            .json(&body)
            .send()
            .await
            .map_err(|e| BackendError::from_transport(&e, &url))?;

        let response = Self::ensure_success(response).await?;

        let text = response
            .text()
            .await
            .map_err(|e| BackendError::from_transport(&e, &url))?;

        let parsed: GenerateResponse = serde_json::from_str(&text).map_err(|e| {
            BackendError::response_parsing(format!("Failed to parse response: {}", e))
        })?;

        if let Some(message) = &parsed.error {
            return Err(BackendError::api(StatusCode::OK.as_u16(), message.clone()));
        }

        Ok(parsed)
    }

    /// Streamed completion
    ///
    /// Only the wait for the response head is bounded by the stream deadline;
    /// a slow but live body is not cut off.
    pub async fn generate_stream(&self, prompt: &str) -> Result<ByteStream, BackendError> {
        let url = self.config.generate_url();
        let body = self.build_request(prompt, true);
        debug!(model = %body.model, prompt_chars = prompt.len(), "Opening completion stream");

        let deadline = self.config.stream_timeout();
        let send = self.client.post(&url).json(&body).send();

        let response = match tokio::time::timeout(deadline, send).await {
            Ok(result) => result.map_err(|e| BackendError::from_transport(&e, &url))?,
            Err(_) => {
                return Err(BackendError::timeout(format!(
                    "No response from {} within {}",
                    url,
                    format_deadline(deadline)
                )));
            }
        };

        let response = Self::ensure_success(response).await?;

        let stream = response
            .bytes_stream()
            .map(|chunk| chunk.map_err(|e| BackendError::streaming(e.to_string())));

        Ok(Box::pin(stream))
    }

    /// Reachability probe against the model listing endpoint
    pub async fn health_check(&self) -> bool {
        let url = self.config.tags_url();
        match self
            .client
            .get(&url)
            .timeout(Duration::from_secs(5))
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                warn!("Completion service health check failed: {}", e);
                false
            }
        }
    }

    /// Turn any non-200 answer into an error carrying the reported message
    ///
    /// Statuses below 500 usually carry a structured `{"error": ...}` body.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, BackendError> {
        let status = response.status();
        if status == StatusCode::OK {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .map(|b| b.error)
            .ok()
            .filter(|m| !m.is_empty())
            .or_else(|| (!body.trim().is_empty()).then(|| body.trim().to_string()))
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("unknown error")
                    .to_string()
            });

        if status.is_server_error() {
            warn!(status = status.as_u16(), "Completion service failed: {}", message);
        } else {
            debug!(status = status.as_u16(), "Completion service rejected request: {}", message);
        }

        Err(BackendError::api(status.as_u16(), message))
    }
}

#[async_trait]
impl CompletionBackend for CompletionClient {
    async fn complete(&self, prompt: &str) -> Result<String, BackendError> {
        self.generate(prompt)
            .await
            .map(|response| response.response.trim().to_string())
    }

    async fn complete_stream(&self, prompt: &str) -> Result<ByteStream, BackendError> {
        self.generate_stream(prompt).await
    }

    async fn health_check(&self) -> bool {
        CompletionClient::health_check(self).await
    }

    fn model(&self) -> &str {
        &self.config.model
    }
}

fn format_deadline(deadline: Duration) -> String {
    if deadline.subsec_millis() == 0 {
        format!("{}s", deadline.as_secs())
    } else {
        format!("{}ms", deadline.as_millis())
    }
}
