//! Configuration schema types.
//!
//! Leaf keys deliberately contain no underscores so the environment
//! split (`RECADO_GATEWAY_URL` → `gateway.url`) stays unambiguous.

use serde::{Deserialize, Serialize};

/// Top-level recado configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RecadoConfig {
    /// Messaging gateway settings.
    #[serde(default)]
    pub gateway: GatewayConfig,
    /// Streamed transport settings.
    #[serde(default)]
    pub http: HttpConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Messaging gateway settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Base URL of the send-text gateway.
    #[serde(default = "default_gateway_url")]
    pub url: String,
    /// Gateway session label, reported in the resource snapshot.
    #[serde(default = "default_session")]
    pub session: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            url: default_gateway_url(),
            session: default_session(),
        }
    }
}

fn default_gateway_url() -> String {
    "http://localhost:3000".to_string()
}
fn default_session() -> String {
    "default".to_string()
}

/// Streamed transport settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// TCP port for the SSE transport.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

fn default_port() -> u16 {
    8000
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g. "info", "debug", "recado=trace").
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
