//! Transport-layer error types.

use thiserror::Error;

/// Errors from the HTTP transport layer.
#[derive(Debug, Error)]
pub enum HttpTransportError {
    /// Failed to bind the TCP listener.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
    /// The server loop exited with an error.
    #[error("server error: {0}")]
    Serve(String),
}
