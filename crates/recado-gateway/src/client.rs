//! Gateway port and the reqwest-backed adapter.

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::debug;

use crate::outcome::SendOutcome;

/// Domain suffix appended to the raw recipient to form the provider
/// chat identifier.
const CHAT_DOMAIN: &str = "@c.us";

/// Port for the outbound send-text capability.
///
/// Implementations must convert every failure into a `SendOutcome`;
/// callers rely on this method being infallible at the type level.
#[async_trait]
pub trait MessageGateway: Send + Sync {
    /// Sends `body` to `recipient` (bare phone number, country code
    /// included, no `+` or spaces).
    async fn send_message(&self, recipient: &str, body: &str) -> SendOutcome;
}

/// Reqwest adapter for a WAHA-compatible gateway.
pub struct HttpGateway {
    http: reqwest::Client,
    base_url: String,
}

impl HttpGateway {
    /// Creates a client for the gateway at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Returns the configured gateway base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn send_text_url(&self) -> String {
        format!("{}/api/sendText", self.base_url.trim_end_matches('/'))
    }
}

/// Builds the provider chat identifier for a raw recipient.
pub(crate) fn chat_id(recipient: &str) -> String {
    format!("{recipient}{CHAT_DOMAIN}")
}

#[async_trait]
impl MessageGateway for HttpGateway {
    async fn send_message(&self, recipient: &str, body: &str) -> SendOutcome {
        let url = self.send_text_url();
        debug!(%url, recipient, "posting send-text request");

        let response = self
            .http
            .post(&url)
            .json(&json!({
                "chatId": chat_id(recipient),
                "text": body,
            }))
            .send()
            .await;

        match response {
            Ok(resp) if resp.status().is_success() => {
                let data = match resp.text().await {
                    Ok(text) => serde_json::from_str::<Value>(&text)
                        .unwrap_or(Value::String(text)),
                    Err(e) => return SendOutcome::failed(recipient, e.to_string()),
                };
                SendOutcome::delivered(recipient, data)
            }
            Ok(resp) => {
                let status = resp.status();
                let detail = resp.text().await.unwrap_or_default();
                SendOutcome::failed(recipient, format!("gateway returned {status}: {detail}"))
            }
            Err(e) => SendOutcome::failed(recipient, e.to_string()),
        }
    }
}
