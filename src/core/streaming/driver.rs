//! Async driver feeding a byte stream through the reconciler

use super::reconciler::{ReconcileEvent, StreamReconciler};
use crate::core::backend::BackendError;
use crate::core::types::IncrementalChunk;
use async_trait::async_trait;
use bytes::Bytes;
use futures::{Stream, StreamExt};
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Receiver of reconciled chunks
#[async_trait]
pub trait ChunkSink: Send {
    /// Hand one chunk over; `false` means the receiver is gone
    async fn deliver(&mut self, chunk: IncrementalChunk) -> bool;
}

#[async_trait]
impl ChunkSink for mpsc::Sender<IncrementalChunk> {
    async fn deliver(&mut self, chunk: IncrementalChunk) -> bool {
        self.send(chunk).await.is_ok()
    }
}

#[async_trait]
impl ChunkSink for Vec<IncrementalChunk> {
    async fn deliver(&mut self, chunk: IncrementalChunk) -> bool {
        self.push(chunk);
        true
    }
}

/// Summary of a reconciled stream
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreamOutcome {
    /// Full accumulated text
    pub text: String,
    /// Chunks accepted by the sink
    pub chunks_delivered: usize,
    /// Whether the backend sent a terminal record
    pub completed: bool,
    /// Whether the sink was still accepting chunks at the end
    pub receiver_connected: bool,
}

/// Drive `stream` to its end, forwarding chunks to `sink`
///
/// `on_complete` runs once, with the full text, after the body ended cleanly
/// and the backend sent a terminal record after producing text. Once the sink
/// reports the receiver gone, chunks are dropped but the upstream body is
/// still read to the end. A transport error aborts with
/// [`BackendError::Streaming`] and `on_complete` never runs.
pub async fn reconcile<S, K, F>(
    stream: S,
    sink: &mut K,
    mut on_complete: F,
) -> Result<StreamOutcome, BackendError>
where
    S: Stream<Item = Result<Bytes, BackendError>>,
    K: ChunkSink + ?Sized,
    F: FnMut(&str),
{
    let mut reconciler = StreamReconciler::new();
    let mut outcome = StreamOutcome {
        receiver_connected: true,
        ..StreamOutcome::default()
    };

    let mut completed: Option<String> = None;

    futures::pin_mut!(stream);

    while let Some(fragment) = stream.next().await {
        let fragment = match fragment {
            Ok(fragment) => fragment,
            Err(e) => {
                warn!(
                    received_chars = reconciler.text().len(),
                    "Completion stream failed: {}", e
                );
                return Err(match e {
                    BackendError::Streaming { .. } => e,
                    other => BackendError::streaming(other.to_string()),
                });
            }
        };

        let events = reconciler.feed(&fragment);
        dispatch(events, sink, &mut completed, &mut outcome).await;
    }

    let events = reconciler.finish();
    dispatch(events, sink, &mut completed, &mut outcome).await;

    if let Some(text) = completed {
        on_complete(&text);
    }

    if reconciler.dropped_records() > 0 {
        debug!(
            dropped = reconciler.dropped_records(),
            "Dropped malformed records from completion stream"
        );
    }

    outcome.text = reconciler.text().to_string();
    outcome.completed = reconciler.is_done();
    Ok(outcome)
}

async fn dispatch<K>(
    events: Vec<ReconcileEvent>,
    sink: &mut K,
    completed: &mut Option<String>,
    outcome: &mut StreamOutcome,
) where
    K: ChunkSink + ?Sized,
{
    for event in events {
        match event {
            ReconcileEvent::Chunk(chunk) => {
                if !outcome.receiver_connected {
                    continue;
                }
                if sink.deliver(chunk).await {
                    outcome.chunks_delivered += 1;
                } else {
                    debug!("Stream receiver disconnected, draining upstream");
                    outcome.receiver_connected = false;
                }
            }
            ReconcileEvent::Completed(text) => *completed = Some(text),
        }
    }
}
