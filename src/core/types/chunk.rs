//! Incremental response units

use serde::{Deserialize, Serialize};

/// One unit of progressively revealed response text
///
/// `cumulative_text` never shrinks between chunks of the same request, and the
/// final chunk carries the complete response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncrementalChunk {
    pub cumulative_text: String,
    pub is_final: bool,
}

impl IncrementalChunk {
    pub fn partial(text: impl Into<String>) -> Self {
        Self {
            cumulative_text: text.into(),
            is_final: false,
        }
    }

    pub fn final_chunk(text: impl Into<String>) -> Self {
        Self {
            cumulative_text: text.into(),
            is_final: true,
        }
    }
}
