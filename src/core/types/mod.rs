//! Shared data types for the relay core

mod chat;
mod chunk;

pub use chat::{Role, Turn};
pub use chunk::IncrementalChunk;
