//! Handles the `list_resources` method.

use recado_protocol::rpc::{ResourceDescriptor, ResourcesListResult};
use recado_protocol::{error_codes, JsonRpcErrorResponse, JsonRpcResponse, RequestId};

use crate::handler::JsonRpcOutput;

/// Returns the static resource catalog.
pub(crate) fn handle(id: RequestId, resources: &[ResourceDescriptor]) -> JsonRpcOutput {
    let result = ResourcesListResult {
        resources: resources.to_vec(),
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
