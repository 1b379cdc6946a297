//! Handles the `list_tools` method.

use recado_protocol::rpc::ToolsListResult;
use recado_protocol::{
    error_codes, JsonRpcErrorResponse, JsonRpcResponse, LogLevel, RequestId,
};
use recado_registry::{ProgressSink, ToolRegistry};

use crate::handler::JsonRpcOutput;

/// Returns the tool catalog.
pub(crate) fn handle(
    id: RequestId,
    registry: &ToolRegistry,
    progress: &dyn ProgressSink,
) -> JsonRpcOutput {
    progress.notify(LogLevel::Info, "listing available tools");

    let result = ToolsListResult {
        tools: registry.list(),
    };

    match serde_json::to_value(result) {
        Ok(v) => JsonRpcOutput::Success(JsonRpcResponse::success(id, v)),
        Err(e) => JsonRpcOutput::Error(JsonRpcErrorResponse::error(
            id,
            error_codes::INTERNAL_ERROR,
            e.to_string(),
        )),
    }
}
