//! `list_resources` wire types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A resource entry as advertised by `list_resources`.
///
/// Static, read-only, process-lifetime — built once from the
/// configuration at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceDescriptor {
    /// Unique resource name.
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// JSON Schema describing the resource data.
    pub schema: Value,
    /// Current data snapshot.
    pub data: Value,
}

/// Response for `list_resources`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourcesListResult {
    /// Available resources.
    pub resources: Vec<ResourceDescriptor>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn resource_descriptor_roundtrip() {
        let d = ResourceDescriptor {
            name: "gateway_config".into(),
            description: "Messaging gateway settings".into(),
            schema: json!({"type": "object"}),
            data: json!({"apiUrl": "http://localhost:3000", "sessionId": "default"}),
        };
        let s = serde_json::to_string(&d).expect("ser");
        let back: ResourceDescriptor = serde_json::from_str(&s).expect("de");
        assert_eq!(back.data["sessionId"], "default");
    }

    #[test]
    fn resources_list_result_shape() {
        let r = ResourcesListResult {
            resources: vec![],
        };
        let v = serde_json::to_value(r).expect("ser");
        assert!(v["resources"].as_array().expect("arr").is_empty());
    }
}
