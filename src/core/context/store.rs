//! Session history store

use super::prompt::render_prompt;
use crate::config::ContextConfig;
use crate::core::types::Turn;
use dashmap::DashMap;
use tracing::debug;

/// Bounded per-session conversation history
///
/// Sessions are created lazily on the first appended pair and only removed by
/// [`ContextStore::clear`]. Every stored sequence holds whole user/assistant
/// pairs, oldest first.
#[derive(Debug)]
pub struct ContextStore {
    sessions: DashMap<String, Vec<Turn>>,
    config: ContextConfig,
}

impl ContextStore {
    pub fn new(config: ContextConfig) -> Self {
        Self {
            sessions: DashMap::new(),
            config,
        }
    }

    /// Ordered history of a session, empty for unknown sessions
    pub fn get_context(&self, session_id: &str) -> Vec<Turn> {
        self.sessions
            .get(session_id)
            .map(|turns| turns.clone())
            .unwrap_or_default()
    }

    /// Append a user/assistant pair, then drop the oldest pairs while the
    /// session is over its token budget
    ///
    /// The newest pair is always kept, even when it alone exceeds the budget.
    pub fn add_turn(&self, session_id: &str, user_message: &str, assistant_response: &str) {
        let mut turns = self.sessions.entry(session_id.to_string()).or_default();
        turns.push(Turn::user(user_message));
        turns.push(Turn::assistant(assistant_response));

        let budget_chars = self.config.max_tokens.saturating_mul(4);
        let mut total_chars: usize = turns.iter().map(Turn::char_count).sum();
        let mut trimmed = 0usize;

        while total_chars > budget_chars && turns.len() > 2 {
            let removed: usize = turns.drain(..2).map(|t| t.char_count()).sum();
            total_chars -= removed;
            trimmed += 1;
        }

        if trimmed > 0 {
            debug!(
                session_id = %session_id,
                trimmed_pairs = trimmed,
                remaining_turns = turns.len(),
                "Trimmed conversation context"
            );
        }
    }

    /// Prompt for `new_message` including the most recent history pairs
    pub fn build_prompt(&self, session_id: &str, new_message: &str) -> String {
        let window = self.config.prompt_history_pairs * 2;
        match self.sessions.get(session_id) {
            Some(turns) => {
                let start = turns.len().saturating_sub(window);
                render_prompt(&turns[start..], new_message)
            }
            None => render_prompt(&[], new_message),
        }
    }

    /// Delete all history for a session
    pub fn clear(&self, session_id: &str) {
        if self.sessions.remove(session_id).is_some() {
            debug!(session_id = %session_id, "Cleared conversation context");
        }
    }

    /// Number of sessions with stored history
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Number of stored turns for a session
    pub fn turn_count(&self, session_id: &str) -> usize {
        self.sessions.get(session_id).map_or(0, |turns| turns.len())
    }

    /// Estimated token cost of a session's history (four characters per token)
    pub fn estimate_tokens(&self, session_id: &str) -> usize {
        self.sessions.get(session_id).map_or(0, |turns| {
            turns
                .iter()
                .map(Turn::char_count)
                .sum::<usize>()
                .div_ceil(4)
        })
    }

    pub fn config(&self) -> &ContextConfig {
        &self.config
    }
}

impl Default for ContextStore {
    fn default() -> Self {
        Self::new(ContextConfig::default())
    }
}
