//! Conversation context configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Conversation context configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextConfig {
    /// Estimated token budget per session
    #[serde(default = "default_context_max_tokens")]
    pub max_tokens: usize,
    /// User/assistant pairs rendered into each prompt
    #[serde(default = "default_prompt_history_pairs")]
    pub prompt_history_pairs: usize,
    /// Longest accepted user message, in characters
    #[serde(default = "default_max_message_length")]
    pub max_message_length: usize,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            max_tokens: default_context_max_tokens(),
            prompt_history_pairs: default_prompt_history_pairs(),
            max_message_length: default_max_message_length(),
        }
    }
}

impl ContextConfig {
    /// Merge context configurations
    pub fn merge(mut self, other: Self) -> Self {
        if other.max_tokens != default_context_max_tokens() {
            self.max_tokens = other.max_tokens;
        }
        if other.prompt_history_pairs != default_prompt_history_pairs() {
            self.prompt_history_pairs = other.prompt_history_pairs;
        }
        if other.max_message_length != default_max_message_length() {
            self.max_message_length = other.max_message_length;
        }
        self
    }
}
