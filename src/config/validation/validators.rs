//! Configuration validators
//!
//! Validation implementations for each relay configuration section.

use super::trait_def::Validate;
use crate::config::models::*;
use tracing::debug;

impl Validate for RelayConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating relay configuration");

        self.server.validate()?;
        self.backend.validate()?;
        self.cache.validate()?;
        self.storage.validate()?;
        self.context.validate()?;

        debug!("Relay configuration validation completed");
        Ok(())
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), String> {
        if self.host.is_empty() {
            return Err("Server host cannot be empty".to_string());
        }

        if self.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }

        if let Some(workers) = self.workers {
            if workers == 0 {
                return Err("Worker count must be greater than 0".to_string());
            }
        }

        Ok(())
    }
}

impl Validate for BackendConfig {
    fn validate(&self) -> Result<(), String> {
        let url = url::Url::parse(&self.base_url)
            .map_err(|e| format!("Invalid backend URL '{}': {}", self.base_url, e))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(format!(
                "Backend URL must use http or https, got '{}'",
                url.scheme()
            ));
        }

        if self.model.trim().is_empty() {
            return Err("Backend model cannot be empty".to_string());
        }

        if !(0.0..=2.0).contains(&self.temperature) {
            return Err("Temperature must be between 0 and 2".to_string());
        }

        if self.top_p <= 0.0 || self.top_p > 1.0 {
            return Err("top_p must be in (0, 1]".to_string());
        }

        if self.num_predict == 0 {
            return Err("num_predict must be greater than 0".to_string());
        }

        if self.request_timeout == 0 || self.stream_timeout == 0 {
            return Err("Backend timeouts must be greater than 0".to_string());
        }

        Ok(())
    }
}

impl Validate for CacheConfig {
    fn validate(&self) -> Result<(), String> {
        if self.ttl == 0 {
            return Err("Cache TTL must be greater than 0".to_string());
        }

        if self.key_length == 0 {
            return Err("Cache key length must be greater than 0".to_string());
        }

        Ok(())
    }
}

impl Validate for StorageConfig {
    fn validate(&self) -> Result<(), String> {
        if self.redis.enabled && self.redis.url.is_empty() {
            return Err("Redis URL cannot be empty when Redis is enabled".to_string());
        }

        Ok(())
    }
}

impl Validate for ContextConfig {
    fn validate(&self) -> Result<(), String> {
        if self.max_tokens == 0 {
            return Err("Context token budget must be greater than 0".to_string());
        }

        if self.max_message_length == 0 {
            return Err("Maximum message length must be greater than 0".to_string());
        }

        Ok(())
    }
}
