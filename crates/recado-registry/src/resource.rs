//! Static resource catalog.

use serde_json::json;

use recado_protocol::rpc::ResourceDescriptor;

/// Builds the resource catalog from the configured gateway settings.
///
/// A single `gateway_config` resource exposes the gateway URL and the
/// session label as a read-only snapshot.
pub fn gateway_resources(gateway_url: &str, session: &str) -> Vec<ResourceDescriptor> {
    vec![ResourceDescriptor {
        name: "gateway_config".to_string(),
        description: "Messaging gateway configuration".to_string(),
        schema: json!({
            "type": "object",
            "properties": {
                "apiUrl": {
                    "type": "string",
                    "description": "Base URL of the messaging gateway"
                },
                "sessionId": {
                    "type": "string",
                    "description": "Gateway session label"
                }
            }
        }),
        data: json!({
            "apiUrl": gateway_url,
            "sessionId": session,
        }),
    }]
}
