//! Request and response types

use crate::utils::error::GatewayError;
use serde::Serialize;
use std::fmt;

/// Session used when the caller does not name one
pub const DEFAULT_SESSION_ID: &str = "default";

/// Incoming chat request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatRequest {
    pub message: String,
    pub session_id: String,
    pub use_cache: bool,
    pub use_streaming: bool,
}

impl ChatRequest {
    /// Request for the default session, cached, single-shot
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            session_id: DEFAULT_SESSION_ID.to_string(),
            use_cache: true,
            use_streaming: false,
        }
    }

    /// Blank ids fall back to the default session
    pub fn session(mut self, session_id: impl Into<String>) -> Self {
        let session_id = session_id.into();
        self.session_id = if session_id.trim().is_empty() {
            DEFAULT_SESSION_ID.to_string()
        } else {
            session_id
        };
        self
    }

    pub fn use_cache(mut self, use_cache: bool) -> Self {
        self.use_cache = use_cache;
        self
    }

    pub fn streaming(mut self, use_streaming: bool) -> Self {
        self.use_streaming = use_streaming;
        self
    }
}

/// Timing and provenance attached to every answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseMetadata {
    pub cached: bool,
    /// Milliseconds from receipt to answer
    pub response_time: u64,
    pub session_id: String,
}

/// Single-shot answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatResponse {
    pub response: String,
    pub metadata: ResponseMetadata,
}

/// Failed single-shot request
#[derive(Debug)]
pub struct ChatFailure {
    pub error: GatewayError,
    pub metadata: ResponseMetadata,
}

impl fmt::Display for ChatFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (session {})", self.error, self.metadata.session_id)
    }
}

impl std::error::Error for ChatFailure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

/// Metadata carried by streamed chunks
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamMetadata {
    pub cached: bool,
    pub session_id: String,
    /// Only present on the final chunk
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_time: Option<u64>,
}

/// Event emitted on a streamed chat request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ChatStreamEvent {
    #[serde(rename_all = "camelCase")]
    Chunk {
        /// Cumulative text so far
        chunk: String,
        is_complete: bool,
        metadata: StreamMetadata,
    },
    #[serde(rename_all = "camelCase")]
    Error { error: String, session_id: String },
}

impl ChatStreamEvent {
    pub fn error(error: impl Into<String>, session_id: impl Into<String>) -> Self {
        Self::Error {
            error: error.into(),
            session_id: session_id.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    pub fn is_complete(&self) -> bool {
        matches!(
            self,
            Self::Chunk {
                is_complete: true,
                ..
            }
        )
    }
}
