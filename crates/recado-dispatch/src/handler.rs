//! Request routing.

use std::sync::Arc;

use tracing::debug;

use recado_protocol::rpc::ResourceDescriptor;
use recado_protocol::{
    error_codes, JsonRpcErrorResponse, JsonRpcRequest, JsonRpcResponse,
};
use recado_registry::{ProgressSink, ToolRegistry};

use crate::dispatch;

/// Either a success or an error response envelope.
#[derive(Debug, Clone)]
pub enum JsonRpcOutput {
    /// Successful result.
    Success(JsonRpcResponse),
    /// Structured error.
    Error(JsonRpcErrorResponse),
}

impl JsonRpcOutput {
    /// Serializes the envelope to its wire form.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        match self {
            JsonRpcOutput::Success(r) => serde_json::to_string(r),
            JsonRpcOutput::Error(e) => serde_json::to_string(e),
        }
    }
}

/// Dispatches validated requests to the method implementations.
///
/// Holds the immutable catalogs and the progress sink; no state
/// persists across requests.
pub struct RpcHandler {
    registry: Arc<ToolRegistry>,
    resources: Vec<ResourceDescriptor>,
    progress: Arc<dyn ProgressSink>,
}

impl RpcHandler {
    /// Creates a handler over the given catalogs and progress sink.
    pub fn new(
        registry: Arc<ToolRegistry>,
        resources: Vec<ResourceDescriptor>,
        progress: Arc<dyn ProgressSink>,
    ) -> Self {
        Self {
            registry,
            resources,
            progress,
        }
    }

    /// Routes one request and produces its response envelope.
    ///
    /// Every failure below this boundary is already a data value;
    /// only unknown methods, bad parameters, and internal faults
    /// become error envelopes.
    pub async fn dispatch(&self, request: &JsonRpcRequest) -> JsonRpcOutput {
        debug!(method = %request.method, id = ?request.id, "dispatching request");
        let id = request.id.clone();

        match request.method.as_str() {
            recado_protocol::methods::LIST_TOOLS => {
                dispatch::list_tools::handle(id, &self.registry, self.progress.as_ref())
            }
            recado_protocol::methods::LIST_RESOURCES => {
                dispatch::list_resources::handle(id, &self.resources)
            }
            recado_protocol::methods::INVOKE_TOOL => {
                dispatch::invoke_tool::handle(
                    id,
                    &request.params,
                    &self.registry,
                    self.progress.as_ref(),
                )
                .await
            }
            other => JsonRpcOutput::Error(JsonRpcErrorResponse::error(
                id,
                error_codes::METHOD_NOT_FOUND,
                format!("unknown method: {other}"),
            )),
        }
    }
}
