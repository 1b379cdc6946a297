//! `recado serve` command.
//!
//! Starts the RPC server over stdio or SSE, exposing the send-message
//! tool via JSON-RPC 2.0.

use std::sync::Arc;

use clap::Args;

use recado_registry::NullSink;
use recado_transport_http::{HttpServer, SessionTable};
use recado_transport_stdio::{PipeServer, StdioTransport};

use crate::shared;

/// Start the RPC server (stdio or SSE).
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Transport mode: stdio (default) or sse.
    #[arg(long, default_value = "stdio", value_parser = ["stdio", "sse"])]
    pub transport: String,
    /// TCP port for the SSE transport (overrides config).
    #[arg(long)]
    pub port: Option<u16>,
    /// Messaging gateway base URL (overrides config).
    #[arg(long)]
    pub gateway_url: Option<String>,
}

/// Executes the serve command.
pub async fn execute(args: &ServeArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let mut config = shared::load_config(config_path)?;
    if let Some(url) = &args.gateway_url {
        config.gateway.url = url.clone();
    }
    if let Some(port) = args.port {
        config.http.port = port;
    }

    match args.transport.as_str() {
        "sse" => {
            let sessions = Arc::new(SessionTable::new());
            let handler = Arc::new(shared::build_handler(&config, sessions.clone()));
            let server = HttpServer::new(handler, sessions, config.http.port);
            tokio::select! {
                result = server.run() => {
                    result.map_err(|e| anyhow::anyhow!("server error: {e}"))?;
                }
                _ = tokio::signal::ctrl_c() => {
                    tracing::info!("shutdown signal received");
                }
            }
        }
        _ => {
            let handler = shared::build_handler(&config, Arc::new(NullSink));
            let transport = StdioTransport::new(tokio::io::stdin(), tokio::io::stdout());
            let mut server = PipeServer::new(transport, handler);
            tracing::info!("recado server ready on stdio");
            tokio::select! {
                result = server.run() => {
                    result.map_err(|e| anyhow::anyhow!("server error: {e}"))?;
                }
                _ = tokio::signal::ctrl_c() => {
                    tracing::info!("shutdown signal received");
                }
            }
        }
    }

    Ok(())
}
