//! Tool-boundary error types.

use thiserror::Error;

/// Errors a tool may surface to the dispatcher.
///
/// Application-level send failures are NOT errors — they travel inside
/// the tool's result value. Only protocol-visible problems use this
/// type.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The supplied parameters fail the tool's required-field contract.
    #[error("invalid params: {0}")]
    InvalidParams(String),
    /// Unexpected fault during execution.
    #[error("{0}")]
    Internal(String),
}
