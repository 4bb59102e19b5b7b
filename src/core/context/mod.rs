//! Per-session conversation context
//!
//! Bounded in-memory history of user/assistant pairs and the prompt template
//! that folds that history into each new completion request.

mod prompt;
mod store;

pub use prompt::{CONTEXT_END, CONTEXT_START, SYSTEM_PREAMBLE, render_prompt};
pub use store::ContextStore;
