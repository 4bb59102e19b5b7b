//! Prompt template

use crate::core::types::Turn;

/// Fixed instruction placed at the top of every prompt
pub const SYSTEM_PREAMBLE: &str = "You are a helpful assistant. The conversation history \
between the context markers is background information only. Use it to understand \
references in the new message, but never repeat or quote it verbatim. Reply only to \
the latest user message.";

/// Opening marker of the history block
pub const CONTEXT_START: &str = "CONTEXT START";

/// Closing marker of the history block
pub const CONTEXT_END: &str = "CONTEXT END";

/// Render a prompt from recent history and a new user message
///
/// `history` is rendered in order; callers pass only the window they want
/// included. The history block is omitted entirely when `history` is empty.
pub fn render_prompt(history: &[Turn], new_message: &str) -> String {
    let mut prompt = String::with_capacity(
        SYSTEM_PREAMBLE.len()
            + new_message.len()
            + history.iter().map(|t| t.content().len() + 16).sum::<usize>()
            + 64,
    );

    prompt.push_str(SYSTEM_PREAMBLE);
    prompt.push_str("\n\n");

    if !history.is_empty() {
        prompt.push_str(CONTEXT_START);
        prompt.push('\n');
        for turn in history {
            prompt.push_str(turn.role().label());
            prompt.push_str(": ");
            prompt.push_str(turn.content());
            prompt.push('\n');
        }
        prompt.push_str(CONTEXT_END);
        prompt.push_str("\n\n");
    }

    prompt.push_str("User: ");
    prompt.push_str(new_message);
    prompt.push_str("\nAssistant:");
    prompt
}
