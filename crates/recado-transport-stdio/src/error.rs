//! Transport-layer error types.

use thiserror::Error;

/// Errors from the stream-pipe transport layer.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Failed to read from the input stream.
    #[error("read error: {0}")]
    Read(String),
    /// Failed to write to the output stream.
    #[error("write error: {0}")]
    Write(String),
}
