//! Tests for configuration validation

use super::trait_def::Validate;
use crate::config::models::*;

#[test]
fn test_default_config_is_valid() {
    assert!(RelayConfig::default().validate().is_ok());
}

#[test]
fn test_server_config_validation() {
    let mut config = ServerConfig::default();
    assert!(config.validate().is_ok());

    config.port = 0;
    assert!(config.validate().is_err());

    config.port = 8080;
    config.host = "".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_backend_config_validation() {
    let mut config = BackendConfig::default();
    assert!(config.validate().is_ok());

    config.base_url = "ftp://localhost:11434".to_string();
    assert!(config.validate().is_err());

    config.base_url = "http://localhost:11434".to_string();
    config.top_p = 0.0;
    assert!(config.validate().is_err());

    config.top_p = 0.9;
    config.request_timeout = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_cache_config_validation() {
    let mut config = CacheConfig::default();
    assert!(config.validate().is_ok());

    config.ttl = 0;
    assert!(config.validate().is_err());

    config.ttl = 60;
    config.key_length = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_context_config_validation() {
    let mut config = ContextConfig::default();
    assert!(config.validate().is_ok());

    config.max_tokens = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_redis_url_required_when_enabled() {
    let mut config = StorageConfig::default();
    config.redis.url.clear();
    assert!(config.validate().is_err());

    config.redis.enabled = false;
    assert!(config.validate().is_ok());
}
