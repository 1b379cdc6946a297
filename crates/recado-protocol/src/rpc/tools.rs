//! `list_tools` / `invoke_tool` wire types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A tool entry as advertised by `list_tools`.
///
/// Immutable after process start; the registry builds the catalog once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDescriptor {
    /// Unique tool name.
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// JSON Schema describing the named parameters.
    pub parameters: Value,
}

/// Response for `list_tools`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolsListResult {
    /// Available tools.
    pub tools: Vec<ToolDescriptor>,
}

/// Request params for `invoke_tool`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvokeToolParams {
    /// Name of the tool to invoke.
    pub tool_name: String,
    /// Arguments to pass to the tool.
    #[serde(default)]
    pub parameters: Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn invoke_params_deserialize() {
        let j = r#"{"tool_name":"send_message","parameters":{"recipient":"55119","body":"oi"}}"#;
        let p: InvokeToolParams = serde_json::from_str(j).expect("de");
        assert_eq!(p.tool_name, "send_message");
        assert_eq!(p.parameters["body"], "oi");
    }

    #[test]
    fn invoke_params_default_to_null_arguments() {
        let p: InvokeToolParams =
            serde_json::from_str(r#"{"tool_name":"send_message"}"#).expect("de");
        assert!(p.parameters.is_null());
    }

    #[test]
    fn descriptor_roundtrip() {
        let d = ToolDescriptor {
            name: "send_message".into(),
            description: "Sends a text message".into(),
            parameters: json!({"type": "object"}),
        };
        let s = serde_json::to_string(&d).expect("ser");
        let back: ToolDescriptor = serde_json::from_str(&s).expect("de");
        assert_eq!(back.name, "send_message");
    }

    #[test]
    fn tools_list_result_shape() {
        let r = ToolsListResult {
            tools: vec![ToolDescriptor {
                name: "t".into(),
                description: "d".into(),
                parameters: json!({}),
            }],
        };
        let v = serde_json::to_value(r).expect("ser");
        assert_eq!(v["tools"][0]["name"], "t");
    }
}
