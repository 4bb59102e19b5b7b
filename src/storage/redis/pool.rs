//! Redis connection management

use crate::config::RedisConfig;
use crate::utils::error::{GatewayError, Result};
use crate::utils::logging::sanitize_url;
use redis::Client;
use redis::aio::ConnectionManager;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Redis connection (supports no-op mode when Redis is unavailable)
#[derive(Clone)]
pub struct RedisPool {
    /// Auto-reconnecting connection (None in no-op mode)
    pub(crate) connection: Option<ConnectionManager>,
    /// Last observed connectivity
    pub(crate) connected: Arc<AtomicBool>,
    pub(crate) config: RedisConfig,
}

impl RedisPool {
    /// Connect to Redis
    pub async fn new(config: &RedisConfig) -> Result<Self> {
        info!("Connecting to Redis");
        debug!("Redis URL: {}", sanitize_url(&config.url));

        let client = Client::open(config.url.as_str()).map_err(GatewayError::Redis)?;

        let timeout = Duration::from_secs(config.connection_timeout.max(1));
        let connection = tokio::time::timeout(timeout, client.get_connection_manager())
            .await
            .map_err(|_| {
                GatewayError::cache(format!(
                    "Timed out connecting to Redis after {}s",
                    timeout.as_secs()
                ))
            })?
            .map_err(GatewayError::Redis)?;

        info!("Redis connection established");
        Ok(Self {
            connection: Some(connection),
            connected: Arc::new(AtomicBool::new(true)),
            config: config.clone(),
        })
    }

    /// Connect, falling back to no-op mode when Redis cannot be reached
    pub async fn connect_or_noop(config: &RedisConfig) -> Self {
        match Self::new(config).await {
            Ok(pool) => pool,
            Err(e) => {
                warn!("Redis unavailable, responses will not be cached: {}", e);
                Self::create_noop(config)
            }
        }
    }

    /// Create a no-op pool that reports itself disconnected
    pub fn create_noop(config: &RedisConfig) -> Self {
        info!("Creating no-op Redis pool (Redis unavailable)");
        Self {
            connection: None,
            connected: Arc::new(AtomicBool::new(false)),
            config: config.clone(),
        }
    }

    pub fn is_noop(&self) -> bool {
        self.connection.is_none()
    }

    pub fn config(&self) -> &RedisConfig {
        &self.config
    }

    /// Round-trip a PING and record the outcome
    pub async fn health_check(&self) -> Result<()> {
        let mut conn = self.connection()?;
        let pong: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(|e| self.record_failure(e))?;
        self.record_success();
        debug!("Redis health check passed: {}", pong);
        Ok(())
    }

    /// Connection handle, or an error in no-op mode
    pub(crate) fn connection(&self) -> Result<ConnectionManager> {
        self.connection
            .clone()
            .ok_or_else(|| GatewayError::cache("Redis is not connected"))
    }

    pub(crate) fn record_success(&self) {
        if !self.connected.swap(true, Ordering::SeqCst) {
            info!("Redis connection restored");
        }
    }

    /// Mark the connection down when the failure is a transport one
    pub(crate) fn record_failure(&self, err: redis::RedisError) -> GatewayError {
        if err.is_io_error() || err.is_connection_dropped() || err.is_connection_refusal() || err.is_timeout() {
            if self.connected.swap(false, Ordering::SeqCst) {
                warn!("Redis connection lost: {}", err);
            }
        }
        GatewayError::Redis(err)
    }
}

impl std::fmt::Debug for RedisPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisPool")
            .field("url", &sanitize_url(&self.config.url))
            .field("noop", &self.is_noop())
            .field("connected", &self.connected.load(Ordering::SeqCst))
            .finish()
    }
}
