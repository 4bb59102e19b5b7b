//! Configuration loading from environment variables

use super::models::*;
use crate::utils::error::{GatewayError, Result};
use std::str::FromStr;
use tracing::debug;

impl RelayConfig {
    /// Load configuration from process environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable lookup
    ///
    /// Variables that are absent keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        debug!("Loading configuration from environment variables");

        let mut config = Self::default();

        if let Some(host) = lookup("RELAY_HOST") {
            config.server.host = host;
        }
        if let Some(port) = parse_var(&lookup, "RELAY_PORT")? {
            config.server.port = port;
        }
        if let Some(url) = lookup("OLLAMA_URL") {
            config.backend.base_url = url;
        }
        if let Some(model) = lookup("OLLAMA_MODEL") {
            config.backend.model = model;
        }
        if let Some(url) = lookup("REDIS_URL") {
            config.storage.redis.url = url;
        }
        if let Some(enabled) = parse_var(&lookup, "REDIS_ENABLED")? {
            config.storage.redis.enabled = enabled;
        }
        if let Some(ttl) = parse_var(&lookup, "CACHE_TTL")? {
            config.cache.ttl = ttl;
        }
        if let Some(enabled) = parse_var(&lookup, "CACHE_ENABLED")? {
            config.cache.enabled = enabled;
        }
        if let Some(delay) = parse_var(&lookup, "REPLAY_DELAY_MS")? {
            config.cache.replay_delay_ms = delay;
        }
        if let Some(max_tokens) = parse_var(&lookup, "CONTEXT_MAX_TOKENS")? {
            config.context.max_tokens = max_tokens;
        }
        if let Some(level) = lookup("LOG_LEVEL") {
            config.logging.level = level;
        }

        Ok(config)
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> Result<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| GatewayError::Config(format!("Invalid {}: {}", key, e))),
        None => Ok(None),
    }
}
