//! Input validation

use super::types::ChatRequest;
use crate::utils::error::{GatewayError, Result};
use serde_json::Value;

/// Read a chat request from a JSON body
///
/// Only checks shapes. Content limits are applied by [`validate_message`].
pub fn parse_chat_request(body: &Value) -> Result<ChatRequest> {
    let message = match body.get("message") {
        Some(Value::String(message)) => message.clone(),
        _ => {
            return Err(GatewayError::validation(
                "Message is required and must be a string",
            ));
        }
    };

    let session_id = match body.get("sessionId") {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(id)) => id.clone(),
        Some(_) => return Err(GatewayError::validation("Session ID must be a string")),
    };

    let use_cache = optional_flag(body, "useCache", true)?;
    let use_streaming = optional_flag(body, "useStreaming", false)?;

    Ok(ChatRequest::new(message)
        .session(session_id)
        .use_cache(use_cache)
        .streaming(use_streaming))
}

fn optional_flag(body: &Value, field: &str, default: bool) -> Result<bool> {
    match body.get(field) {
        None | Some(Value::Null) => Ok(default),
        Some(Value::Bool(flag)) => Ok(*flag),
        Some(_) => Err(GatewayError::validation(format!("{} must be a boolean", field))),
    }
}

/// Reject blank messages and messages over `max_chars` characters
pub fn validate_message(message: &str, max_chars: usize) -> Result<()> {
    if message.trim().is_empty() {
        return Err(GatewayError::validation("Message cannot be empty"));
    }

    if message.chars().count() > max_chars {
        return Err(GatewayError::validation(format!(
            "Message too long (max {} characters)",
            max_chars
        )));
    }

    Ok(())
}
