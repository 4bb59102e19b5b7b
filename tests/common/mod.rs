//! Common test utilities for chat-relay

pub mod backend;
pub mod fixtures;

pub use backend::MockCompletionService;
pub use fixtures::TestRelay;
