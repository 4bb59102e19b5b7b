//! Shared utilities
//!
//! - `error` - crate-wide error type and HTTP rendering
//! - `logging` - tracing subscriber setup and log sanitisation

pub mod error;
pub mod logging;
