//! Application-level result of a send attempt.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Outcome of one send-message invocation.
///
/// Deliberately distinct from an RPC-level error: a failed send is
/// still a well-formed result value, delivered inside a successful
/// response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendOutcome {
    /// Whether the gateway accepted the message.
    pub success: bool,
    /// Provider response payload, present on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    /// Error detail, present on failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Human-readable status message.
    pub message: String,
}

impl SendOutcome {
    /// Builds a success outcome carrying the provider response.
    pub fn delivered(recipient: &str, data: Value) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            message: format!("message sent to {recipient}"),
        }
    }

    /// Builds a failure outcome carrying the error detail.
    pub fn failed(recipient: &str, error: impl Into<String>) -> Self {
        let error = error.into();
        Self {
            success: false,
            data: None,
            message: format!("failed to send message to {recipient}: {error}"),
            error: Some(error),
        }
    }
}
