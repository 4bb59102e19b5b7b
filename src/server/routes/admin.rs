//! Session, cache and metrics administration

use super::ApiResponse;
use crate::server::state::AppState;
use actix_web::{HttpResponse, web};
use serde_json::json;

/// `DELETE /api/context/{session_id}`
pub async fn clear_context(state: web::Data<AppState>, path: web::Path<String>) -> HttpResponse {
    let session_id = path.into_inner();
    state.orchestrator.clear_session_context(&session_id);
    HttpResponse::Ok().json(ApiResponse::success(json!({
        "sessionId": session_id,
        "cleared": true
    })))
}

/// `DELETE /api/cache`
pub async fn clear_cache(state: web::Data<AppState>) -> HttpResponse {
    if state.orchestrator.clear_cache().await {
        HttpResponse::Ok().json(ApiResponse::success(json!({ "cleared": true })))
    } else {
        HttpResponse::ServiceUnavailable()
            .json(ApiResponse::<()>::error("Cache store is not reachable"))
    }
}

/// `GET /api/metrics`
pub async fn metrics(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.orchestrator.metrics_snapshot())
}
