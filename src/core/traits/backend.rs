//! Completion backend trait

use crate::core::backend::{BackendError, ByteStream};
use async_trait::async_trait;

/// Something that turns a rendered prompt into model output
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Full completion, whitespace-trimmed
    async fn complete(&self, prompt: &str) -> Result<String, BackendError>;

    /// Raw newline-delimited JSON body of a streamed completion
    async fn complete_stream(&self, prompt: &str) -> Result<ByteStream, BackendError>;

    /// Whether the backend currently answers
    async fn health_check(&self) -> bool {
        true
    }

    /// Model identifier, for logs and health output
    fn model(&self) -> &str;
}
