//! Completion backend errors

use std::error::Error as StdError;
use thiserror::Error;

/// Errors raised while talking to the completion service
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    /// Connection refused or otherwise not accepting connections
    #[error("Completion service unreachable: {message}")]
    Unreachable { message: String },

    /// Host could not be resolved
    #[error("Completion service not found: {message}")]
    NotFound { message: String },

    /// Request exceeded its deadline
    #[error("Completion service timed out: {message}")]
    Timeout { message: String },

    /// Service answered with a non-success status
    #[error("Completion service error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Any other transport failure
    #[error("Network error: {message}")]
    Network { message: String },

    /// Response body could not be decoded
    #[error("Invalid response from completion service: {message}")]
    ResponseParsing { message: String },

    /// Streamed response broke off mid-way
    #[error("Streaming error: {message}")]
    Streaming { message: String },
}

impl BackendError {
    pub fn unreachable(message: impl Into<String>) -> Self {
        Self::Unreachable {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout {
            message: message.into(),
        }
    }

    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    pub fn response_parsing(message: impl Into<String>) -> Self {
        Self::ResponseParsing {
            message: message.into(),
        }
    }

    pub fn streaming(message: impl Into<String>) -> Self {
        Self::Streaming {
            message: message.into(),
        }
    }

    /// Stable machine-readable code for the error
    pub fn code(&self) -> &'static str {
        match self {
            Self::Unreachable { .. } => "BACKEND_UNREACHABLE",
            Self::NotFound { .. } => "BACKEND_NOT_FOUND",
            Self::Timeout { .. } => "BACKEND_TIMEOUT",
            Self::Api { .. } => "BACKEND_ERROR",
            Self::Network { .. } => "NETWORK_ERROR",
            Self::ResponseParsing { .. } => "BACKEND_RESPONSE_INVALID",
            Self::Streaming { .. } => "STREAMING_ERROR",
        }
    }

    /// Relabel a transport failure for the request to `target`
    pub fn from_transport(err: &reqwest::Error, target: &str) -> Self {
        if err.is_timeout() {
            return Self::timeout(format!("Request to {} timed out", target));
        }

        let chain = error_chain(err).to_lowercase();
        if is_resolution_failure(&chain) {
            Self::not_found(format!("Could not resolve host for {}: {}", target, err))
        } else if err.is_connect() || chain.contains("connection refused") {
            Self::unreachable(format!("Connection to {} failed: {}", target, err))
        } else {
            Self::network(format!("Request to {} failed: {}", target, err))
        }
    }
}

impl From<reqwest::Error> for BackendError {
    fn from(err: reqwest::Error) -> Self {
        let target = err
            .url()
            .map(|u| u.to_string())
            .unwrap_or_else(|| "completion service".to_string());
        Self::from_transport(&err, &target)
    }
}

impl From<serde_json::Error> for BackendError {
    fn from(err: serde_json::Error) -> Self {
        Self::response_parsing(err.to_string())
    }
}

/// Flatten an error and all of its sources into one string
fn error_chain(err: &(dyn StdError + 'static)) -> String {
    let mut text = err.to_string();
    let mut source = err.source();
    while let Some(inner) = source {
        text.push_str(": ");
        text.push_str(&inner.to_string());
        source = inner.source();
    }
    text
}

fn is_resolution_failure(chain: &str) -> bool {
    const MARKERS: &[&str] = &[
        "dns error",
        "failed to lookup address",
        "name or service not known",
        "nodename nor servname",
        "no such host",
        "temporary failure in name resolution",
    ];
    MARKERS.iter().any(|marker| chain.contains(marker))
}
