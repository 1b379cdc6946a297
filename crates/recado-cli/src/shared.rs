//! Shared wiring helpers used across CLI commands.
//!
//! Centralises the repetitive pattern of loading configuration and
//! assembling gateway → registry → handler, ensuring every command
//! serves the same catalog.

use std::sync::Arc;

use recado_config::RecadoConfig;
use recado_dispatch::RpcHandler;
use recado_gateway::HttpGateway;
use recado_registry::{gateway_resources, ProgressSink, SendMessageTool, ToolRegistry};

/// Loads configuration, mapping failures to a CLI-level error.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<RecadoConfig> {
    recado_config::load_config(config_path).map_err(|e| anyhow::anyhow!("{e}"))
}

/// Builds the standard tool catalog over the configured gateway.
pub fn build_registry(config: &RecadoConfig) -> Arc<ToolRegistry> {
    let gateway = Arc::new(HttpGateway::new(config.gateway.url.clone()));
    Arc::new(ToolRegistry::new(vec![Arc::new(SendMessageTool::new(
        gateway,
    ))]))
}

/// Builds the dispatcher over the standard catalog.
pub fn build_handler(config: &RecadoConfig, progress: Arc<dyn ProgressSink>) -> RpcHandler {
    let resources = gateway_resources(&config.gateway.url, &config.gateway.session);
    RpcHandler::new(build_registry(config), resources, progress)
}
