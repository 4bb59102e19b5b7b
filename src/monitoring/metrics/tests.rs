use super::*;
use chrono::Utc;

fn record(response_time_ms: u64, cache_hit: bool, streaming: bool) -> RequestMetricsRecord {
    RequestMetricsRecord {
        timestamp: Utc::now(),
        response_time_ms,
        cache_hit,
        streaming,
        message_length: 12,
        response_length: 40,
        session_id: "s1".to_string(),
        error: None,
    }
}

#[test]
fn test_empty_snapshot() {
    let log = MetricsLog::new();
    let snapshot = log.snapshot();
    assert!(log.is_empty());
    assert_eq!(snapshot.total_requests, 0);
    assert_eq!(snapshot.cache_hit_rate, 0.0);
    assert_eq!(snapshot.average_response_time_ms, 0.0);
    assert!(snapshot.recent.is_empty());
}

#[test]
fn test_average_over_full_log() {
    let log = MetricsLog::new();
    log.record(record(100, false, false));
    assert_eq!(log.snapshot().average_response_time_ms, 100.0);

    log.record(record(300, true, false));
    log.record(record(200, false, true));
    let snapshot = log.snapshot();
    assert_eq!(snapshot.average_response_time_ms, 200.0);
    assert_eq!(snapshot.total_requests, 3);
    assert_eq!(snapshot.cache_hits, 1);
    assert_eq!(snapshot.cache_misses, 2);
    assert_eq!(snapshot.streaming_requests, 1);
    assert!((snapshot.cache_hit_rate - 1.0 / 3.0).abs() < 1e-9);
}

#[test]
fn test_errors_are_counted() {
    let log = MetricsLog::new();
    log.record(record(10, false, false));
    log.record(RequestMetricsRecord {
        error: Some("Completion service timed out".to_string()),
        ..record(60_000, false, false)
    });
    assert_eq!(log.snapshot().errors, 1);
}

#[test]
fn test_recent_keeps_last_ten_in_order() {
    let log = MetricsLog::new();
    for i in 0..25 {
        log.record(record(i, false, false));
    }
    let snapshot = log.snapshot();
    assert_eq!(snapshot.total_requests, 25);
    assert_eq!(snapshot.recent.len(), 10);
    assert_eq!(snapshot.recent[0].response_time_ms, 15);
    assert_eq!(snapshot.recent[9].response_time_ms, 24);
}

#[test]
fn test_snapshot_serializes_camel_case() {
    let log = MetricsLog::new();
    log.record(record(5, true, true));
    let value = serde_json::to_value(log.snapshot()).unwrap();
    assert_eq!(value["totalRequests"], 1);
    assert_eq!(value["recent"][0]["cacheHit"], true);
    assert_eq!(value["recent"][0]["sessionId"], "s1");
    assert!(value["recent"][0].get("error").is_none());
}

#[test]
fn test_uptime_without_records() {
    let log = MetricsLog::new();
    assert_eq!(log.uptime_seconds(), 0);
    assert!(log.is_empty());
    assert_eq!(log.snapshot().uptime_seconds, log.uptime_seconds());
}
