//! Reassembly of a newline-delimited completion stream

use crate::core::backend::GenerateResponse;
use crate::core::types::IncrementalChunk;
use tracing::{debug, warn};

/// Longest record accepted before the partial line is discarded
pub const MAX_LINE_BYTES: usize = 1024 * 1024;

/// Something the caller has to act on after feeding bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconcileEvent {
    /// Forward to the client
    Chunk(IncrementalChunk),
    /// The backend sent its terminal record; carries the full text
    Completed(String),
}

/// Incremental parser for a streamed completion body
///
/// Bytes are buffered until a newline, so records and multi-byte characters
/// may be split anywhere across fragments.
#[derive(Debug, Default)]
pub struct StreamReconciler {
    buffer: Vec<u8>,
    cumulative: String,
    final_emitted: bool,
    done: bool,
    discarding: bool,
    dropped_records: usize,
}

impl StreamReconciler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text accumulated so far
    pub fn text(&self) -> &str {
        &self.cumulative
    }

    /// Whether a terminal record has been seen
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Whether a chunk marked final has been produced
    pub fn final_emitted(&self) -> bool {
        self.final_emitted
    }

    /// Records dropped as malformed or oversized
    pub fn dropped_records(&self) -> usize {
        self.dropped_records
    }

    /// Consume one fragment of the body
    pub fn feed(&mut self, fragment: &[u8]) -> Vec<ReconcileEvent> {
        let mut events = Vec::new();
        let mut rest = fragment;

        while let Some(pos) = rest.iter().position(|&b| b == b'\n') {
            let (head, tail) = rest.split_at(pos);
            rest = &tail[1..];

            if self.discarding {
                self.discarding = false;
                continue;
            }

            if self.buffer.is_empty() {
                self.process_line(head, &mut events);
            } else {
                let mut line = std::mem::take(&mut self.buffer);
                line.extend_from_slice(head);
                self.process_line(&line, &mut events);
            }
        }

        if !self.discarding {
            self.buffer.extend_from_slice(rest);
            if self.buffer.len() > MAX_LINE_BYTES {
                warn!(
                    bytes = self.buffer.len(),
                    "Discarding oversized record from completion stream"
                );
                self.buffer.clear();
                self.discarding = true;
                self.dropped_records += 1;
            }
        }

        events
    }

    /// Signal end of input
    ///
    /// An unterminated trailing record is still parsed. If text was produced
    /// but no final chunk went out, a final chunk with the full text closes
    /// the stream.
    pub fn finish(&mut self) -> Vec<ReconcileEvent> {
        let mut events = Vec::new();

        let trailing = std::mem::take(&mut self.buffer);
        if !self.discarding && !trailing.is_empty() {
            self.process_line(&trailing, &mut events);
        }
        self.discarding = false;

        if !self.final_emitted && !self.cumulative.is_empty() {
            self.final_emitted = true;
            events.push(ReconcileEvent::Chunk(IncrementalChunk::final_chunk(
                self.cumulative.clone(),
            )));
        }

        events
    }

    fn process_line(&mut self, line: &[u8], events: &mut Vec<ReconcileEvent>) {
        let Ok(line) = std::str::from_utf8(line) else {
            debug!("Dropping non UTF-8 record");
            self.dropped_records += 1;
            return;
        };
        let line = line.trim();
        if line.is_empty() {
            return;
        }

        if self.done {
            debug!("Ignoring record after terminal marker");
            return;
        }

        let record: GenerateResponse = match serde_json::from_str(line) {
            Ok(record) => record,
            Err(e) => {
                debug!("Dropping malformed record: {}", e);
                self.dropped_records += 1;
                return;
            }
        };

        if let Some(error) = &record.error {
            debug!("Completion stream reported an error record: {}", error);
            return;
        }

        if !record.response.is_empty() {
            self.cumulative.push_str(&record.response);
            let chunk = IncrementalChunk {
                cumulative_text: self.cumulative.clone(),
                is_final: record.done,
            };
            self.final_emitted |= record.done;
            events.push(ReconcileEvent::Chunk(chunk));
        }

        if record.done {
            self.done = true;
            if !self.cumulative.is_empty() {
                events.push(ReconcileEvent::Completed(self.cumulative.clone()));
            }
        }
    }
}
