//! # chat-relay
//!
//! A chat relay in front of a local text-completion server. It forwards user
//! messages with a bounded window of conversation history, caches answers,
//! and streams generated text back as it is produced.
//!
//! ## Features
//!
//! - **Incremental streaming**: newline-delimited backend output is
//!   reassembled into growing chunks and served as Server-Sent Events
//! - **Response cache**: Redis or in-process, fail-soft, with word-by-word
//!   replay of cached answers on streamed requests
//! - **Conversation context**: per-session history trimmed to a token budget
//! - **Request metrics**: per-request records with running aggregates
//!
//! ## Embedding the relay
//!
//! ```rust,no_run
//! use chat_relay::{Config, Relay};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config/relay.yaml").await?;
//!     Relay::new(config).await?.run().await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Using the orchestrator directly
//!
//! ```rust,no_run
//! use chat_relay::{ChatRequest, Config, server::AppState};
//!
//! # async fn demo() -> chat_relay::Result<()> {
//! let state = AppState::from_config(Config::default()).await?;
//! let answer = state
//!     .orchestrator
//!     .handle_chat_request(ChatRequest::new("What is Rust?").session("demo"))
//!     .await;
//! # let _ = answer;
//! # Ok(())
//! # }
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod monitoring;
pub mod server;
pub mod storage;
pub mod utils;

pub use config::Config;
pub use core::backend::{BackendError, CompletionClient};
pub use core::cache::{CacheAdapter, CacheLookup, CachedResponse};
pub use core::context::ContextStore;
pub use core::orchestrator::{
    ChatFailure, ChatOrchestrator, ChatRequest, ChatResponse, ChatStreamEvent,
};
pub use core::streaming::{StreamReconciler, reconcile};
pub use core::traits::{CompletionBackend, KeyValueStore};
pub use core::types::{IncrementalChunk, Role, Turn};
pub use monitoring::{MetricsLog, MetricsSnapshot};
pub use utils::error::{GatewayError, Result};

use tracing::info;

/// A configured relay ready to serve
pub struct Relay {
    config: Config,
    server: server::HttpServer,
}

impl Relay {
    /// Connect stores and build the HTTP server
    pub async fn new(config: Config) -> Result<Self> {
        info!("Creating relay instance");
        let server = server::HttpServer::new(&config).await?;
        Ok(Self { config, server })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Serve until shutdown
    pub async fn run(self) -> Result<()> {
        info!(
            address = %self.config.server().address(),
            model = %self.config.backend().model,
            "Starting chat relay"
        );
        self.server.start().await
    }
}

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
