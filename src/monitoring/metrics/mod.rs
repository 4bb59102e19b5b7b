//! Metrics log and snapshots

mod log;
#[cfg(test)]
mod tests;
mod types;

pub use log::MetricsLog;
pub use types::{MetricsSnapshot, RequestMetricsRecord};
