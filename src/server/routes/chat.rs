//! Chat endpoints

use crate::core::orchestrator::{ChatFailure, ChatRequest, ChatStreamEvent, parse_chat_request};
use crate::core::streaming::{Event, create_error_event, create_sse_response, done_event};
use crate::server::state::AppState;
use crate::utils::error::{ErrorDetail, GatewayError, Result};
use actix_web::{HttpResponse, ResponseError, web};
use futures::stream::{self, StreamExt};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

/// Body of a failed single-shot request
#[derive(Debug, Serialize)]
struct FailureBody<'a> {
    error: ErrorDetail,
    metadata: &'a crate::core::orchestrator::ResponseMetadata,
}

/// `POST /api/chat`
///
/// Served as SSE when the body asks for streaming.
pub async fn chat(state: web::Data<AppState>, body: web::Json<Value>) -> HttpResponse {
    let request = match parse_chat_request(&body) {
        Ok(request) => request,
        Err(e) => return e.error_response(),
    };

    if request.use_streaming {
        return stream_response(&state, request);
    }

    match state.orchestrator.handle_chat_request(request).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(failure) => failure_response(&failure),
    }
}

/// `POST /api/chat/stream`
pub async fn chat_stream(state: web::Data<AppState>, body: web::Json<Value>) -> HttpResponse {
    match parse_chat_request(&body) {
        Ok(request) => stream_response(&state, request.streaming(true)),
        Err(e) => e.error_response(),
    }
}

fn stream_response(state: &AppState, request: ChatRequest) -> HttpResponse {
    debug!(session_id = %request.session_id, "Opening event stream");

    let events = state
        .orchestrator
        .handle_chat_stream_request(request)
        .map(|event| encode(&event))
        .chain(stream::once(async { Ok::<_, GatewayError>(done_event().to_bytes()) }));

    create_sse_response(events)
}

/// SSE framing of one stream event
fn encode(event: &ChatStreamEvent) -> Result<web::Bytes> {
    let framed = match event {
        ChatStreamEvent::Error { error, session_id } => create_error_event(error, session_id),
        ChatStreamEvent::Chunk { .. } => Event::default().data(&serde_json::to_string(event)?),
    };
    Ok(framed.to_bytes())
}

fn failure_response(failure: &ChatFailure) -> HttpResponse {
    let error: &GatewayError = &failure.error;
    let body = FailureBody {
        error: ErrorDetail {
            code: error.code().to_string(),
            message: error.to_string(),
            timestamp: chrono::Utc::now().timestamp(),
        },
        metadata: &failure.metadata,
    };
    HttpResponse::build(error.status_code()).json(body)
}
