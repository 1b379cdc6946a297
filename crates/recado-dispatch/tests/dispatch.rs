//! Dispatch tests for the shared RPC surface: correlation ids, error
//! codes, and the transport-error vs application-failure distinction.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};

use recado_dispatch::{JsonRpcOutput, RpcHandler};
use recado_gateway::{MessageGateway, SendOutcome};
use recado_protocol::{JsonRpcRequest, LogLevel, RequestId};
use recado_registry::{
    gateway_resources, NullSink, ProgressSink, SendMessageTool, ToolRegistry,
};

/// Gateway double: scripted outcome, records whether it was called.
struct ScriptedGateway {
    fail_with: Option<String>,
    called: AtomicBool,
}

impl ScriptedGateway {
    fn succeeding() -> Arc<Self> {
        Arc::new(Self {
            fail_with: None,
            called: AtomicBool::new(false),
        })
    }

    fn failing(error: &str) -> Arc<Self> {
        Arc::new(Self {
            fail_with: Some(error.to_string()),
            called: AtomicBool::new(false),
        })
    }
}

#[async_trait]
impl MessageGateway for ScriptedGateway {
    async fn send_message(&self, recipient: &str, _body: &str) -> SendOutcome {
        self.called.store(true, Ordering::SeqCst);
        match &self.fail_with {
            None => SendOutcome::delivered(recipient, json!({"queued": true})),
            Some(e) => SendOutcome::failed(recipient, e.clone()),
        }
    }
}

/// Sink double collecting (level, message) pairs.
#[derive(Default)]
struct CollectingSink {
    seen: Mutex<Vec<(LogLevel, String)>>,
}

impl ProgressSink for CollectingSink {
    fn notify(&self, level: LogLevel, message: &str) {
        self.seen.lock().expect("lock").push((level, message.into()));
    }
}

fn handler_with(gateway: Arc<dyn MessageGateway>, sink: Arc<dyn ProgressSink>) -> RpcHandler {
    let registry = Arc::new(ToolRegistry::new(vec![Arc::new(SendMessageTool::new(
        gateway,
    ))]));
    let resources = gateway_resources("http://localhost:3000", "default");
    RpcHandler::new(registry, resources, sink)
}

fn rpc(method: &str, id: i64, params: Option<Value>) -> JsonRpcRequest {
    JsonRpcRequest::new(RequestId::Number(id), method, params)
}

fn to_value(output: &JsonRpcOutput) -> Value {
    serde_json::from_str(&output.to_json().expect("ser")).expect("de")
}

#[tokio::test]
async fn invoke_tool_echoes_correlation_id_and_reports_success() {
    let handler = handler_with(ScriptedGateway::succeeding(), Arc::new(NullSink));
    let req = rpc(
        "invoke_tool",
        7,
        Some(json!({
            "tool_name": "send_message",
            "parameters": {"recipient": "5511999999999", "body": "oi"}
        })),
    );
    let parsed = to_value(&handler.dispatch(&req).await);
    assert_eq!(parsed["id"], 7);
    assert_eq!(parsed["result"]["success"], true);
    assert!(parsed.get("error").is_none());
}

#[tokio::test]
async fn string_correlation_id_is_preserved() {
    let handler = handler_with(ScriptedGateway::succeeding(), Arc::new(NullSink));
    let req = JsonRpcRequest::new(RequestId::String("req-42".into()), "list_tools", None);
    let parsed = to_value(&handler.dispatch(&req).await);
    assert_eq!(parsed["id"], "req-42");
}

#[tokio::test]
async fn unknown_tool_yields_method_not_found_naming_it() {
    let handler = handler_with(ScriptedGateway::succeeding(), Arc::new(NullSink));
    let req = rpc(
        "invoke_tool",
        1,
        Some(json!({"tool_name": "delete_message", "parameters": {}})),
    );
    let parsed = to_value(&handler.dispatch(&req).await);
    assert_eq!(parsed["error"]["code"], -32601);
    assert!(parsed["error"]["message"]
        .as_str()
        .expect("msg")
        .contains("delete_message"));
}

#[tokio::test]
async fn unknown_method_yields_method_not_found() {
    let handler = handler_with(ScriptedGateway::succeeding(), Arc::new(NullSink));
    let parsed = to_value(&handler.dispatch(&rpc("shutdown", 2, None)).await);
    assert_eq!(parsed["error"]["code"], -32601);
    assert!(parsed["error"]["message"]
        .as_str()
        .expect("msg")
        .contains("shutdown"));
}

#[tokio::test]
async fn missing_recipient_is_invalid_params_and_gateway_untouched() {
    let gateway = ScriptedGateway::succeeding();
    let handler = handler_with(gateway.clone(), Arc::new(NullSink));
    let req = rpc(
        "invoke_tool",
        3,
        Some(json!({"tool_name": "send_message", "parameters": {"body": "oi"}})),
    );
    let parsed = to_value(&handler.dispatch(&req).await);
    assert_eq!(parsed["error"]["code"], -32602);
    assert!(!gateway.called.load(Ordering::SeqCst));
}

#[tokio::test]
async fn empty_body_is_invalid_params_and_gateway_untouched() {
    let gateway = ScriptedGateway::succeeding();
    let handler = handler_with(gateway.clone(), Arc::new(NullSink));
    let req = rpc(
        "invoke_tool",
        4,
        Some(json!({
            "tool_name": "send_message",
            "parameters": {"recipient": "55", "body": ""}
        })),
    );
    let parsed = to_value(&handler.dispatch(&req).await);
    assert_eq!(parsed["error"]["code"], -32602);
    assert!(!gateway.called.load(Ordering::SeqCst));
}

#[tokio::test]
async fn missing_params_entirely_is_invalid_params() {
    let handler = handler_with(ScriptedGateway::succeeding(), Arc::new(NullSink));
    let parsed = to_value(&handler.dispatch(&rpc("invoke_tool", 5, None)).await);
    assert_eq!(parsed["error"]["code"], -32602);
}

#[tokio::test]
async fn gateway_failure_is_a_successful_response_with_failure_payload() {
    let handler = handler_with(
        ScriptedGateway::failing("connect timeout"),
        Arc::new(NullSink),
    );
    let req = rpc(
        "invoke_tool",
        6,
        Some(json!({
            "tool_name": "send_message",
            "parameters": {"recipient": "55", "body": "oi"}
        })),
    );
    let parsed = to_value(&handler.dispatch(&req).await);
    assert!(parsed.get("error").is_none(), "must not be an RPC error");
    assert_eq!(parsed["result"]["success"], false);
    assert!(parsed["result"]["error"]
        .as_str()
        .expect("detail")
        .contains("connect timeout"));
}

#[tokio::test]
async fn list_tools_returns_catalog() {
    let handler = handler_with(ScriptedGateway::succeeding(), Arc::new(NullSink));
    let parsed = to_value(&handler.dispatch(&rpc("list_tools", 8, None)).await);
    assert_eq!(parsed["result"]["tools"][0]["name"], "send_message");
}

#[tokio::test]
async fn list_resources_returns_snapshot() {
    let handler = handler_with(ScriptedGateway::succeeding(), Arc::new(NullSink));
    let parsed = to_value(&handler.dispatch(&rpc("list_resources", 9, None)).await);
    assert_eq!(parsed["result"]["resources"][0]["name"], "gateway_config");
    assert_eq!(
        parsed["result"]["resources"][0]["data"]["apiUrl"],
        "http://localhost:3000"
    );
}

#[tokio::test]
async fn send_emits_progress_before_and_after() {
    let sink = Arc::new(CollectingSink::default());
    let handler = handler_with(ScriptedGateway::succeeding(), sink.clone());
    let req = rpc(
        "invoke_tool",
        10,
        Some(json!({
            "tool_name": "send_message",
            "parameters": {"recipient": "55", "body": "oi"}
        })),
    );
    handler.dispatch(&req).await;

    let seen = sink.seen.lock().expect("lock");
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0].0, LogLevel::Info);
    assert!(seen[0].1.contains("sending to 55"));
    assert!(seen[1].1.contains("sent to 55"));
}

#[tokio::test]
async fn failed_send_emits_error_level_progress() {
    let sink = Arc::new(CollectingSink::default());
    let handler = handler_with(ScriptedGateway::failing("refused"), sink.clone());
    let req = rpc(
        "invoke_tool",
        11,
        Some(json!({
            "tool_name": "send_message",
            "parameters": {"recipient": "55", "body": "oi"}
        })),
    );
    handler.dispatch(&req).await;

    let seen = sink.seen.lock().expect("lock");
    assert_eq!(seen[1].0, LogLevel::Error);
    assert!(seen[1].1.contains("error sending to 55"));
    assert!(seen[1].1.contains("refused"));
}
