//! Handles the `invoke_tool` method.

use serde_json::Value;

use recado_protocol::rpc::InvokeToolParams;
use recado_protocol::{error_codes, JsonRpcErrorResponse, JsonRpcResponse, RequestId};
use recado_registry::{ProgressSink, ToolError, ToolRegistry};

use crate::handler::JsonRpcOutput;

/// Looks the tool up, validates its parameters, and executes it.
///
/// An unsuccessful send is still a success envelope — the outcome's
/// own flag reports the failure. Only unknown tools, contract
/// violations, and internal faults become error envelopes.
pub(crate) async fn handle(
    id: RequestId,
    params: &Option<Value>,
    registry: &ToolRegistry,
    progress: &dyn ProgressSink,
) -> JsonRpcOutput {
    let call = match params {
        Some(p) => match serde_json::from_value::<InvokeToolParams>(p.clone()) {
            Ok(c) => c,
            Err(e) => {
                return JsonRpcOutput::Error(JsonRpcErrorResponse::error(
                    id,
                    error_codes::INVALID_PARAMS,
                    format!("invalid invoke_tool params: {e}"),
                ));
            }
        },
        None => {
            return JsonRpcOutput::Error(JsonRpcErrorResponse::error(
                id,
                error_codes::INVALID_PARAMS,
                "invoke_tool requires params",
            ));
        }
    };

    let Some(tool) = registry.find(&call.tool_name) else {
        return JsonRpcOutput::Error(JsonRpcErrorResponse::error(
            id,
            error_codes::METHOD_NOT_FOUND,
            format!("tool not found: {}", call.tool_name),
        ));
    };

    if let Err(e) = tool.validate(&call.parameters) {
        return JsonRpcOutput::Error(JsonRpcErrorResponse::error(
            id,
            error_codes::INVALID_PARAMS,
            e.to_string(),
        ));
    }

    tracing::debug!(tool = %call.tool_name, "executing tool");

    match tool.invoke(&call.parameters, progress).await {
        Ok(result) => JsonRpcOutput::Success(JsonRpcResponse::success(id, result)),
        Err(ToolError::InvalidParams(m)) => JsonRpcOutput::Error(JsonRpcErrorResponse::error(
            id,
            error_codes::INVALID_PARAMS,
            format!("invalid params: {m}"),
        )),
        Err(ToolError::Internal(m)) => JsonRpcOutput::Error(JsonRpcErrorResponse::error(
            id,
            error_codes::INTERNAL_ERROR,
            format!("internal error: {m}"),
        )),
    }
}
