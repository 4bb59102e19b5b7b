//! Word-by-word replay of cached answers

use crate::core::streaming::ChunkSink;
use crate::core::types::IncrementalChunk;
use std::time::Duration;

/// Chunks revealing `text` one whitespace-delimited word at a time
///
/// Each chunk is a prefix of `text` ending after a word; the last one is the
/// whole text, marked final.
pub fn replay_chunks(text: &str) -> Vec<IncrementalChunk> {
    let mut word_ends = Vec::new();
    let mut in_word = false;
    for (i, c) in text.char_indices() {
        if c.is_whitespace() {
            if in_word {
                word_ends.push(i);
            }
            in_word = false;
        } else {
            in_word = true;
        }
    }

    let mut chunks: Vec<IncrementalChunk> = word_ends
        .into_iter()
        .map(|end| IncrementalChunk::partial(&text[..end]))
        .collect();
    chunks.push(IncrementalChunk::final_chunk(text));
    chunks
}

/// Deliver replay chunks with `delay` between them
///
/// Stops early once the receiver is gone. Returns the number delivered.
pub(crate) async fn replay<K>(text: &str, sink: &mut K, delay: Duration) -> usize
where
    K: ChunkSink + ?Sized,
{
    let mut delivered = 0;
    for (i, chunk) in replay_chunks(text).into_iter().enumerate() {
        if i > 0 && !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        if !sink.deliver(chunk).await {
            break;
        }
        delivered += 1;
    }
    delivered
}
