//! Server response types

use serde::Serialize;

/// Health report
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// `ok` when the completion service answers, `degraded` otherwise
    pub status: &'static str,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub backend: BackendHealth,
    pub cache: CacheHealth,
    pub sessions: usize,
    pub uptime_seconds: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct BackendHealth {
    pub url: String,
    pub model: String,
    pub reachable: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct CacheHealth {
    pub enabled: bool,
    pub store: &'static str,
    pub connected: bool,
}
