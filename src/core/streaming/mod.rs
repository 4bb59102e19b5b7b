//! Streaming response handling
//!
//! Turns the newline-delimited JSON body of a streamed completion into
//! growing [`IncrementalChunk`](crate::core::types::IncrementalChunk)s, and
//! frames outgoing events as Server-Sent Events.

use crate::utils::error::Result;
use actix_web::http::header::{CACHE_CONTROL, CONTENT_TYPE};
use actix_web::{HttpResponse, web};
use futures::stream::Stream;

mod driver;
mod reconciler;
mod types;
pub mod utils;

pub use driver::{ChunkSink, StreamOutcome, reconcile};
pub use reconciler::{MAX_LINE_BYTES, ReconcileEvent, StreamReconciler};
pub use types::Event;
pub use utils::{create_error_event, done_event};

/// Create a Server-Sent Events response for Actix-web
pub fn create_sse_response<S>(stream: S) -> HttpResponse
where
    S: Stream<Item = Result<web::Bytes>> + 'static,
{
    HttpResponse::Ok()
        .insert_header((CONTENT_TYPE, "text/event-stream"))
        .insert_header((CACHE_CONTROL, "no-cache"))
        .insert_header(("Connection", "keep-alive"))
        .streaming(stream)
}
