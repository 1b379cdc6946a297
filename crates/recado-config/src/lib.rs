//! # recado-config
//!
//! Layered configuration: defaults, optional TOML file, environment
//! variables with the `RECADO_` prefix.

pub mod loader;
pub mod schema;

pub use loader::{load_config, ConfigError};
pub use schema::{GatewayConfig, HttpConfig, LoggingConfig, RecadoConfig};
