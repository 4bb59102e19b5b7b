//! Integration tests for chat-relay

pub mod cache_tests;
pub mod chat_flow_tests;
pub mod error_handling_tests;
pub mod streaming_tests;
