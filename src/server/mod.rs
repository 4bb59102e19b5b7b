//! HTTP server implementation
//!
//! Thin actix-web surface over the chat orchestrator.

pub mod builder;
pub mod routes;
pub mod server;
pub mod state;
pub mod types;


pub use builder::{ServerBuilder, run_server, run_with_config};
pub use server::HttpServer;
pub use state::AppState;
