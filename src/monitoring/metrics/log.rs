//! Append-only metrics log

use super::types::{MetricsSnapshot, RequestMetricsRecord};
use parking_lot::RwLock;
use std::time::Instant;
use tracing::debug;

/// Records kept in the `recent` part of a snapshot
const RECENT_RECORDS: usize = 10;

#[derive(Debug, Default)]
struct Storage {
    records: Vec<RequestMetricsRecord>,
    average_response_time_ms: f64,
}

/// Process-lifetime log of request metrics
#[derive(Debug)]
pub struct MetricsLog {
    storage: RwLock<Storage>,
    start_time: Instant,
}

impl MetricsLog {
    pub fn new() -> Self {
        Self {
            storage: RwLock::new(Storage::default()),
            start_time: Instant::now(),
        }
    }

    /// Append a record and refresh the running average
    pub fn record(&self, record: RequestMetricsRecord) {
        let mut storage = self.storage.write();
        storage.records.push(record);

        let total: u64 = storage.records.iter().map(|r| r.response_time_ms).sum();
        storage.average_response_time_ms = total as f64 / storage.records.len() as f64;

        debug!(
            total_requests = storage.records.len(),
            average_ms = storage.average_response_time_ms,
            "Recorded request metrics"
        );
    }

    pub fn len(&self) -> usize {
        self.storage.read().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Seconds since the log was created
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// Aggregate figures over the whole log
    pub fn snapshot(&self) -> MetricsSnapshot {
        let storage = self.storage.read();
        let records = &storage.records;

        let total_requests = records.len();
        let cache_hits = records.iter().filter(|r| r.cache_hit).count();
        let streaming_requests = records.iter().filter(|r| r.streaming).count();
        let errors = records.iter().filter(|r| r.is_error()).count();
        let cache_hit_rate = if total_requests == 0 {
            0.0
        } else {
            cache_hits as f64 / total_requests as f64
        };

        let recent_start = total_requests.saturating_sub(RECENT_RECORDS);

        MetricsSnapshot {
            total_requests,
            cache_hits,
            cache_misses: total_requests - cache_hits,
            cache_hit_rate,
            streaming_requests,
            average_response_time_ms: storage.average_response_time_ms,
            errors,
            uptime_seconds: self.uptime_seconds(),
            recent: records[recent_start..].to_vec(),
        }
    }
}

impl Default for MetricsLog {
    fn default() -> Self {
        Self::new()
    }
}
