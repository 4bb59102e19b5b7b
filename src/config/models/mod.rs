//! Configuration data models
//!
//! This module defines all configuration structures used throughout the relay.

#![allow(missing_docs)]

pub mod backend;
pub mod cache;
pub mod context;
pub mod gateway;
pub mod logging;
pub mod server;
pub mod storage;

pub use backend::*;
pub use cache::*;
pub use context::*;
pub use gateway::*;
pub use logging::*;
pub use server::*;
pub use storage::*;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    3001
}

pub fn default_backend_url() -> String {
    "http://localhost:11434".to_string()
}

pub fn default_model() -> String {
    "llama3.2:1b".to_string()
}

pub fn default_temperature() -> f32 {
    0.7
}

pub fn default_top_p() -> f32 {
    0.9
}

pub fn default_num_predict() -> u32 {
    150
}

pub fn default_stop_sequences() -> Vec<String> {
    vec![
        "User:".to_string(),
        "\nUser:".to_string(),
        "Human:".to_string(),
    ]
}

/// Deadline for single-shot completions in seconds
pub fn default_request_timeout() -> u64 {
    60
}

/// Deadline for opening a streamed completion in seconds
pub fn default_stream_timeout() -> u64 {
    30
}

pub fn default_cache_ttl() -> u64 {
    3600 // 1 hour
}

pub fn default_key_prefix() -> String {
    "chat:".to_string()
}

pub fn default_key_length() -> usize {
    50
}

pub fn default_replay_delay_ms() -> u64 {
    50
}

pub fn default_redis_url() -> String {
    "redis://localhost:6379".to_string()
}

pub fn default_connection_timeout() -> u64 {
    5
}

pub fn default_context_max_tokens() -> usize {
    4000
}

pub fn default_prompt_history_pairs() -> usize {
    3
}

pub fn default_max_message_length() -> usize {
    10_000
}

pub fn default_log_level() -> String {
    "info".to_string()
}

pub(crate) fn default_true() -> bool {
    true
}
