//! The polymorphic tool abstraction.

use async_trait::async_trait;
use serde_json::Value;

use recado_protocol::rpc::ToolDescriptor;

use crate::error::ToolError;
use crate::progress::ProgressSink;

/// One invocable operation: identity, parameter contract, and action.
///
/// Both transport bindings drive tools through this trait; a transport
/// never contains tool logic of its own.
#[async_trait]
pub trait Tool: Send + Sync {
    /// The advertised descriptor (name, description, parameter schema).
    fn descriptor(&self) -> &ToolDescriptor;

    /// Checks the required-field contract without executing anything.
    fn validate(&self, params: &Value) -> Result<(), ToolError>;

    /// Executes the tool with validated parameters.
    ///
    /// Application-level failures are encoded in the returned value;
    /// an `Err` here means a protocol-visible fault and becomes an
    /// internal-error response.
    async fn invoke(&self, params: &Value, progress: &dyn ProgressSink)
        -> Result<Value, ToolError>;
}
