//! Seams between the orchestrator and its collaborators

mod backend;
mod store;

pub use backend::CompletionBackend;
pub use store::KeyValueStore;
