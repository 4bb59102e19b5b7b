//! Request orchestration
//!
//! Per-request flow: validate, consult the cache, build the prompt from the
//! session history, call the backend (single-shot or streamed), then fold the
//! answer back into cache and history and record metrics.

mod orchestrator;
mod replay;
mod types;
mod validation;

pub use orchestrator::ChatOrchestrator;
pub use replay::replay_chunks;
pub use types::{
    ChatFailure, ChatRequest, ChatResponse, ChatStreamEvent, DEFAULT_SESSION_ID, ResponseMetadata,
    StreamMetadata,
};
pub use validation::{parse_chat_request, validate_message};
