//! Server builder and run_server function

use crate::config::Config;
use crate::server::server::HttpServer;
use crate::utils::error::{GatewayError, Result};
use std::path::Path;
use tracing::info;

/// Server builder for easier configuration
#[derive(Default)]
pub struct ServerBuilder {
    config: Option<Config>,
}

impl ServerBuilder {
    pub fn new() -> Self {
        Self { config: None }
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the HTTP server
    pub async fn build(self) -> Result<HttpServer> {
        let config = self
            .config
            .ok_or_else(|| GatewayError::config("Configuration is required"))?;

        HttpServer::new(&config).await
    }
}

/// Load configuration and serve until shutdown
///
/// The file at `config_path` is optional; environment variables are layered
/// on top of whatever it provides.
pub async fn run_server(config_path: &Path) -> Result<()> {
    info!("Loading configuration from {}", config_path.display());
    let config = Config::load(config_path).await?;
    run_with_config(config).await
}

/// Serve with an already assembled configuration
pub async fn run_with_config(config: Config) -> Result<()> {
    config.validate()?;

    let server = ServerBuilder::new().with_config(config.clone()).build().await?;
    info!(
        "Chat relay at http://{} (model {} via {})",
        config.server().address(),
        config.backend().model,
        config.backend().base_url
    );
    info!("   POST   /api/chat");
    info!("   POST   /api/chat/stream");
    info!("   DELETE /api/context/{{session_id}}");
    info!("   DELETE /api/cache");
    info!("   GET    /api/metrics");
    info!("   GET    /health");

    server.start().await
}
