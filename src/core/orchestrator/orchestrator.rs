//! Chat request orchestrator

use super::replay::replay;
use super::types::{
    ChatFailure, ChatRequest, ChatResponse, ChatStreamEvent, ResponseMetadata, StreamMetadata,
};
use super::validation::validate_message;
use crate::core::backend::BackendError;
use crate::core::cache::{CacheAdapter, CacheLookup};
use crate::core::context::ContextStore;
use crate::core::streaming::{ChunkSink, reconcile};
use crate::core::traits::CompletionBackend;
use crate::core::types::IncrementalChunk;
use crate::monitoring::{MetricsLog, MetricsSnapshot, RequestMetricsRecord};
use crate::utils::error::GatewayError;
use crate::utils::logging::preview;
use async_trait::async_trait;
use chrono::Utc;
use futures::Stream;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;
use tracing::{debug, info, warn};

/// Buffered events per streamed request
const STREAM_CHANNEL_CAPACITY: usize = 100;

/// Ties cache, history, backend and metrics together per request
#[derive(Clone)]
pub struct ChatOrchestrator {
    context: Arc<ContextStore>,
    cache: CacheAdapter,
    backend: Arc<dyn CompletionBackend>,
    metrics: Arc<MetricsLog>,
}

/// How a request was answered, for the metrics record
struct Outcome<'a> {
    request: &'a ChatRequest,
    started: Instant,
    cached: bool,
    streaming: bool,
    response_length: usize,
    error: Option<String>,
}

impl ChatOrchestrator {
    pub fn new(
        context: Arc<ContextStore>,
        cache: CacheAdapter,
        backend: Arc<dyn CompletionBackend>,
        metrics: Arc<MetricsLog>,
    ) -> Self {
        Self {
            context,
            cache,
            backend,
            metrics,
        }
    }

    pub fn context(&self) -> &ContextStore {
        &self.context
    }

    pub fn cache(&self) -> &CacheAdapter {
        &self.cache
    }

    pub fn backend(&self) -> &dyn CompletionBackend {
        self.backend.as_ref()
    }

    pub fn metrics(&self) -> &MetricsLog {
        &self.metrics
    }

    /// Answer a request in one piece
    pub async fn handle_chat_request(
        &self,
        request: ChatRequest,
    ) -> Result<ChatResponse, ChatFailure> {
        let started = Instant::now();

        if let Err(error) = self.validate(&request) {
            debug!(session_id = %request.session_id, "Rejected chat request: {}", error);
            return Err(ChatFailure {
                error,
                metadata: metadata(&request, started, false),
            });
        }

        info!(
            session_id = %request.session_id,
            message = %preview(&request.message, 50),
            use_cache = request.use_cache,
            "Handling chat request"
        );

        let use_cache = self.caching_enabled(&request);
        let key = self.cache.make_key(&request.message);

        if use_cache {
            if let Some(entry) = self.lookup(&key).await {
                self.record(Outcome {
                    request: &request,
                    started,
                    cached: true,
                    streaming: false,
                    response_length: entry.response.chars().count(),
                    error: None,
                });
                return Ok(ChatResponse {
                    response: entry.response,
                    metadata: metadata(&request, started, true),
                });
            }
        }

        let prompt = self.context.build_prompt(&request.session_id, &request.message);

        let response = match self.backend.complete(&prompt).await {
            Ok(text) => text.trim().to_string(),
            Err(e) => {
                warn!(session_id = %request.session_id, "Completion failed: {}", e);
                self.record(Outcome {
                    request: &request,
                    started,
                    cached: false,
                    streaming: false,
                    response_length: 0,
                    error: Some(e.to_string()),
                });
                return Err(ChatFailure {
                    error: GatewayError::Backend(e),
                    metadata: metadata(&request, started, false),
                });
            }
        };

        if !response.is_empty() {
            if use_cache {
                self.cache.set_detached(key, response.clone());
            }
            self.context
                .add_turn(&request.session_id, &request.message, &response);
        }

        self.record(Outcome {
            request: &request,
            started,
            cached: false,
            streaming: false,
            response_length: response.chars().count(),
            error: None,
        });

        Ok(ChatResponse {
            response,
            metadata: metadata(&request, started, false),
        })
    }

    /// Answer a request as a stream of growing chunks
    ///
    /// The stream ends after the final chunk or after a single error event.
    pub fn handle_chat_stream_request(
        &self,
        request: ChatRequest,
    ) -> impl Stream<Item = ChatStreamEvent> + Send + 'static {
        let (tx, rx) = mpsc::channel(STREAM_CHANNEL_CAPACITY);
        let orchestrator = self.clone();

        tokio::spawn(async move {
            orchestrator.run_stream(request, tx).await;
        });

        ReceiverStream::new(rx)
    }

    /// Drop a session's history
    pub fn clear_session_context(&self, session_id: &str) {
        self.context.clear(session_id);
        info!(session_id = %session_id, "Cleared session context");
    }

    /// Flush the response cache
    pub async fn clear_cache(&self) -> bool {
        let cleared = self.cache.clear().await;
        info!(cleared, "Cache clear requested");
        cleared
    }

    pub fn metrics_snapshot(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    async fn run_stream(&self, request: ChatRequest, tx: mpsc::Sender<ChatStreamEvent>) {
        let started = Instant::now();

        if let Err(error) = self.validate(&request) {
            debug!(session_id = %request.session_id, "Rejected chat stream request: {}", error);
            let _ = tx
                .send(ChatStreamEvent::error(error.to_string(), &request.session_id))
                .await;
            return;
        }

        info!(
            session_id = %request.session_id,
            message = %preview(&request.message, 50),
            use_cache = request.use_cache,
            "Handling streamed chat request"
        );

        let use_cache = self.caching_enabled(&request);
        let key = self.cache.make_key(&request.message);

        if use_cache {
            if let Some(entry) = self.lookup(&key).await {
                let mut sink = EventSink::new(tx, &request.session_id, true, started);
                let delay = self.cache.config().replay_delay();
                let delivered = replay(&entry.response, &mut sink, delay).await;
                debug!(delivered, "Replayed cached answer");

                self.record(Outcome {
                    request: &request,
                    started,
                    cached: true,
                    streaming: true,
                    response_length: entry.response.chars().count(),
                    error: None,
                });
                return;
            }
        }

        let prompt = self.context.build_prompt(&request.session_id, &request.message);

        let stream = match self.backend.complete_stream(&prompt).await {
            Ok(stream) => stream,
            Err(e) => {
                self.fail_stream(&request, started, &tx, e).await;
                return;
            }
        };

        let mut sink = EventSink::new(tx.clone(), &request.session_id, false, started);
        let cache = self.cache.clone();
        let context = Arc::clone(&self.context);
        let session_id = request.session_id.clone();
        let message = request.message.clone();

        let result = reconcile(stream, &mut sink, move |text| {
            let answer = text.trim();
            if answer.is_empty() {
                return;
            }
            if use_cache {
                cache.set_detached(key.clone(), answer.to_string());
            }
            context.add_turn(&session_id, &message, answer);
        })
        .await;

        match result {
            Ok(outcome) => {
                debug!(
                    chunks = outcome.chunks_delivered,
                    completed = outcome.completed,
                    receiver_connected = outcome.receiver_connected,
                    "Completion stream finished"
                );
                self.record(Outcome {
                    request: &request,
                    started,
                    cached: false,
                    streaming: true,
                    response_length: outcome.text.chars().count(),
                    error: None,
                });
            }
            Err(e) => self.fail_stream(&request, started, &tx, e).await,
        }
    }

    async fn fail_stream(
        &self,
        request: &ChatRequest,
        started: Instant,
        tx: &mpsc::Sender<ChatStreamEvent>,
        error: BackendError,
    ) {
        warn!(session_id = %request.session_id, "Streamed completion failed: {}", error);
        let message = error.to_string();
        if tx
            .send(ChatStreamEvent::error(message.clone(), &request.session_id))
            .await
            .is_err()
        {
            debug!("Stream receiver gone before error delivery");
        }
        self.record(Outcome {
            request,
            started,
            cached: false,
            streaming: true,
            response_length: 0,
            error: Some(message),
        });
    }

    fn validate(&self, request: &ChatRequest) -> Result<(), GatewayError> {
        validate_message(&request.message, self.context.config().max_message_length)
    }

    fn caching_enabled(&self, request: &ChatRequest) -> bool {
        request.use_cache && self.cache.config().enabled
    }

    async fn lookup(&self, key: &str) -> Option<crate::core::cache::CachedResponse> {
        match self.cache.lookup(key).await {
            CacheLookup::Hit(entry) => {
                debug!(key, "Cache hit");
                Some(entry)
            }
            CacheLookup::Miss => {
                debug!(key, "Cache miss");
                None
            }
            CacheLookup::BackendUnavailable => {
                debug!(key, "Cache unavailable, generating live");
                None
            }
        }
    }

    fn record(&self, outcome: Outcome<'_>) {
        self.metrics.record(RequestMetricsRecord {
            timestamp: Utc::now(),
            response_time_ms: elapsed_ms(outcome.started),
            cache_hit: outcome.cached,
            streaming: outcome.streaming,
            message_length: outcome.request.message.chars().count(),
            response_length: outcome.response_length,
            session_id: outcome.request.session_id.clone(),
            error: outcome.error,
        });
    }
}

impl std::fmt::Debug for ChatOrchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatOrchestrator")
            .field("model", &self.backend.model())
            .field("cache", &self.cache)
            .field("sessions", &self.context.session_count())
            .finish()
    }
}

/// Wraps chunks into stream events for one request
struct EventSink {
    tx: mpsc::Sender<ChatStreamEvent>,
    session_id: String,
    cached: bool,
    started: Instant,
}

impl EventSink {
    fn new(
        tx: mpsc::Sender<ChatStreamEvent>,
        session_id: &str,
        cached: bool,
        started: Instant,
    ) -> Self {
        Self {
            tx,
            session_id: session_id.to_string(),
            cached,
            started,
        }
    }
}

#[async_trait]
impl ChunkSink for EventSink {
    async fn deliver(&mut self, chunk: IncrementalChunk) -> bool {
        let response_time = chunk.is_final.then(|| elapsed_ms(self.started));
        let event = ChatStreamEvent::Chunk {
            chunk: chunk.cumulative_text,
            is_complete: chunk.is_final,
            metadata: StreamMetadata {
                cached: self.cached,
                session_id: self.session_id.clone(),
                response_time,
            },
        };
        self.tx.send(event).await.is_ok()
    }
}

fn metadata(request: &ChatRequest, started: Instant, cached: bool) -> ResponseMetadata {
    ResponseMetadata {
        cached,
        response_time: elapsed_ms(started),
        session_id: request.session_id.clone(),
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}
