//! Redis storage implementation
//!
//! - `pool` - connection setup, no-op mode and health checks
//! - `cache` - get, set with expiry, flush

mod cache;
mod pool;

pub use pool::RedisPool;
