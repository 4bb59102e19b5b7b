//! Core functionality for the relay
//!
//! Per-request pipeline: cache lookup, context assembly, completion call,
//! stream reconciliation and the bookkeeping that follows.

pub mod backend;
pub mod cache;
pub mod context;
pub mod orchestrator;
pub mod streaming;
pub mod traits;
pub mod types;
