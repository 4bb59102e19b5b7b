//! Response cache
//!
//! Maps a normalized message to a previously generated answer. Every failure
//! of the underlying store degrades to a miss.

mod adapter;
mod key;
mod types;

pub use adapter::CacheAdapter;
pub use key::make_key;
pub use types::{CacheLookup, CachedResponse};
