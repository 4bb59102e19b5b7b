//! Metrics data types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One finished chat request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestMetricsRecord {
    pub timestamp: DateTime<Utc>,
    pub response_time_ms: u64,
    pub cache_hit: bool,
    pub streaming: bool,
    /// Message length in characters
    pub message_length: usize,
    /// Response length in characters
    pub response_length: usize,
    pub session_id: String,
    /// Set when the request failed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RequestMetricsRecord {
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Aggregate view of the metrics log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSnapshot {
    pub total_requests: usize,
    pub cache_hits: usize,
    pub cache_misses: usize,
    /// Hits over total, in `0.0..=1.0`
    pub cache_hit_rate: f64,
    pub streaming_requests: usize,
    pub average_response_time_ms: f64,
    pub errors: usize,
    pub uptime_seconds: u64,
    /// Most recent records, oldest first
    pub recent: Vec<RequestMetricsRecord>,
}
