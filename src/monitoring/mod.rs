//! Request metrics
//!
//! Append-only record of every completed chat request, with aggregate
//! figures derived from it.

pub mod metrics;

pub use metrics::{MetricsLog, MetricsSnapshot, RequestMetricsRecord};
