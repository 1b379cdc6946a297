//! The send-message tool.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::debug;

use recado_gateway::MessageGateway;
use recado_protocol::rpc::ToolDescriptor;
use recado_protocol::LogLevel;

use crate::error::ToolError;
use crate::progress::ProgressSink;
use crate::tool::Tool;

/// Sends one WhatsApp text message through the configured gateway.
pub struct SendMessageTool {
    descriptor: ToolDescriptor,
    gateway: Arc<dyn MessageGateway>,
}

impl SendMessageTool {
    /// Wire name of the tool.
    pub const NAME: &'static str = "send_message";

    /// Creates the tool bound to a gateway.
    pub fn new(gateway: Arc<dyn MessageGateway>) -> Self {
        Self {
            descriptor: ToolDescriptor {
                name: Self::NAME.to_string(),
                description: "Sends a WhatsApp text message through the messaging gateway"
                    .to_string(),
                parameters: input_schema(),
            },
            gateway,
        }
    }
}

fn input_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "recipient": {
                "type": "string",
                "description": "Phone number with country code, no '+' or spaces (e.g. 5511999999999)"
            },
            "body": {
                "type": "string",
                "description": "Text content of the message"
            }
        },
        "required": ["recipient", "body"]
    })
}

/// Extracts a required non-empty string field.
fn required_str<'a>(params: &'a Value, field: &str) -> Result<&'a str, ToolError> {
    params
        .get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| {
            ToolError::InvalidParams(format!("'{field}' is required and must be non-empty"))
        })
}

#[async_trait]
impl Tool for SendMessageTool {
    fn descriptor(&self) -> &ToolDescriptor {
        &self.descriptor
    }

    fn validate(&self, params: &Value) -> Result<(), ToolError> {
        required_str(params, "recipient")?;
        required_str(params, "body")?;
        Ok(())
    }

    async fn invoke(
        &self,
        params: &Value,
        progress: &dyn ProgressSink,
    ) -> Result<Value, ToolError> {
        let recipient = required_str(params, "recipient")?;
        let body = required_str(params, "body")?;

        debug!(recipient, "invoking send-message tool");
        progress.notify(LogLevel::Info, &format!("sending to {recipient}"));

        let outcome = self.gateway.send_message(recipient, body).await;

        match &outcome.error {
            None => progress.notify(LogLevel::Info, &format!("sent to {recipient}")),
            Some(detail) => progress.notify(
                LogLevel::Error,
                &format!("error sending to {recipient}: {detail}"),
            ),
        }

        serde_json::to_value(outcome).map_err(|e| ToolError::Internal(e.to_string()))
    }
}
