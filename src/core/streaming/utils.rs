//! Utility functions for streaming

use super::types::Event;
use serde_json::json;

/// Error event for SSE
pub fn create_error_event(error: &str, session_id: &str) -> Event {
    Event::default()
        .event("error")
        .data(&json!({"error": error, "sessionId": session_id}).to_string())
}

/// Terminal marker closing an SSE stream
pub fn done_event() -> Event {
    Event::default().data("[DONE]")
}

