//! Health check endpoint

use crate::server::state::AppState;
use crate::server::types::{BackendHealth, CacheHealth, HealthResponse};
use actix_web::{HttpResponse, web};

/// `GET /health`
///
/// Always answers 200; an unreachable completion service or an enabled but
/// disconnected cache store only degrades the reported status.
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let orchestrator = &state.orchestrator;
    let backend_config = state.config.backend();

    let reachable = orchestrator.backend().health_check().await;
    let cache = orchestrator.cache();
    let cache_enabled = cache.config().enabled;
    let cache_connected = cache.is_available();
    let healthy = reachable && (!cache_enabled || cache_connected);

    let report = HealthResponse {
        status: if healthy { "ok" } else { "degraded" },
        timestamp: chrono::Utc::now(),
        backend: BackendHealth {
            url: backend_config.base_url.clone(),
            model: orchestrator.backend().model().to_string(),
            reachable,
        },
        cache: CacheHealth {
            enabled: cache_enabled,
            store: cache.store_name(),
            connected: cache_connected,
        },
        sessions: orchestrator.context().session_count(),
        uptime_seconds: orchestrator.metrics().uptime_seconds(),
    };

    HttpResponse::Ok().json(report)
}
