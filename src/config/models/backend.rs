//! Completion backend configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Completion backend configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the completion service
    #[serde(default = "default_backend_url")]
    pub base_url: String,
    /// Model identifier sent with every request
    #[serde(default = "default_model")]
    pub model: String,
    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Nucleus-sampling threshold
    #[serde(default = "default_top_p")]
    pub top_p: f32,
    /// Maximum tokens to generate
    #[serde(default = "default_num_predict")]
    pub num_predict: u32,
    /// Stop sequences
    #[serde(default = "default_stop_sequences")]
    pub stop: Vec<String>,
    /// Single-shot request deadline in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,
    /// Deadline in seconds for a streamed request to start responding
    #[serde(default = "default_stream_timeout")]
    pub stream_timeout: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_backend_url(),
            model: default_model(),
            temperature: default_temperature(),
            top_p: default_top_p(),
            num_predict: default_num_predict(),
            stop: default_stop_sequences(),
            request_timeout: default_request_timeout(),
            stream_timeout: default_stream_timeout(),
        }
    }
}

impl BackendConfig {
    /// Merge backend configurations
    pub fn merge(mut self, other: Self) -> Self {
        if other.base_url != default_backend_url() {
            self.base_url = other.base_url;
        }
        if other.model != default_model() {
            self.model = other.model;
        }
        if other.temperature != default_temperature() {
            self.temperature = other.temperature;
        }
        if other.top_p != default_top_p() {
            self.top_p = other.top_p;
        }
        if other.num_predict != default_num_predict() {
            self.num_predict = other.num_predict;
        }
        if other.stop != default_stop_sequences() {
            self.stop = other.stop;
        }
        if other.request_timeout != default_request_timeout() {
            self.request_timeout = other.request_timeout;
        }
        if other.stream_timeout != default_stream_timeout() {
            self.stream_timeout = other.stream_timeout;
        }
        self
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }

    pub fn stream_timeout(&self) -> Duration {
        Duration::from_secs(self.stream_timeout)
    }

    /// Full URL of the generate endpoint
    pub fn generate_url(&self) -> String {
        format!("{}/api/generate", self.base_url.trim_end_matches('/'))
    }

    /// Full URL used for reachability checks
    pub fn tags_url(&self) -> String {
        format!("{}/api/tags", self.base_url.trim_end_matches('/'))
    }
}
