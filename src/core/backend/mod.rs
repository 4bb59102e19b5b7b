//! Completion backend client
//!
//! HTTP client for the local text-completion service (`/api/generate`),
//! in single-shot and newline-delimited streaming modes, plus the transport
//! error taxonomy used across the relay.

mod client;
mod error;
mod types;

pub use client::CompletionClient;
pub use error::BackendError;
pub use types::{ByteStream, GenerateOptions, GenerateRequest, GenerateResponse};
