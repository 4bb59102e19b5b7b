//! chat-relay - streaming chat relay for a local completion server

use chat_relay::server::run_with_config;
use chat_relay::utils::logging::init_tracing;
use chat_relay::{Config, VERSION};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "relay", version, about = "Streaming chat relay with response caching")]
struct Args {
    /// YAML configuration file (optional)
    #[arg(short, long, env = "RELAY_CONFIG", default_value = "config/relay.yaml")]
    config: PathBuf,

    /// Override the listen host
    #[arg(long)]
    host: Option<String>,

    /// Override the listen port
    #[arg(short, long)]
    port: Option<u16>,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is normal
    let _ = dotenvy::dotenv();
    let args = Args::parse();

    let mut config = match Config::load(&args.config).await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Some(host) = args.host {
        config.gateway.server.host = host;
    }
    if let Some(port) = args.port {
        config.gateway.server.port = port;
    }
    if args.log_json {
        config.gateway.logging.json = true;
    }

    init_tracing(config.logging());
    info!(version = VERSION, "chat-relay starting");

    match run_with_config(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Display keeps multi-line messages readable
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
