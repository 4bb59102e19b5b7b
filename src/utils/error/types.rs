//! Error types for the relay

use crate::core::backend::BackendError;
use thiserror::Error;

/// Result type alias for the relay
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Main error type for the relay
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Redis errors
    #[cfg(feature = "redis")]
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Rejected input (empty, oversized or malformed message)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Completion backend errors
    #[error("Backend error: {0}")]
    Backend(#[from] BackendError),

    /// Streaming transport errors
    #[error("Streaming error: {0}")]
    Streaming(String),

    /// Cache errors
    #[error("Cache error: {0}")]
    Cache(String),

    /// Internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),
}
