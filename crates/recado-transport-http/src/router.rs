//! Axum router for the streamed RPC transport.
//! Routes: `GET /sse` (event channel), `POST /sse` (requests),
//! `GET /health` (liveness).

use std::convert::Infallible;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use std::time::Duration;

use axum::{
    extract::State,
    http::{header, HeaderName, StatusCode},
    response::sse::{Event, KeepAlive, Sse},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use futures::stream::{Stream, StreamExt};
use serde_json::{json, Value};
use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;
use tower_http::cors::CorsLayer;
use tracing::info;

use recado_dispatch::RpcHandler;
use recado_protocol::{error_codes, JsonRpcNotification, JsonRpcRequest, LogLevel};

use crate::session::{SessionId, SessionTable};

/// Path of the combined event/request endpoint.
pub const SSE_PATH: &str = "/sse";

/// Interval between keep-alive comments on the event channel.
const KEEP_ALIVE_INTERVAL: Duration = Duration::from_secs(10);

/// Shared state threaded through all axum handlers.
#[derive(Clone)]
pub struct AppState {
    /// The RPC dispatcher.
    pub handler: Arc<RpcHandler>,
    /// Open streamed sessions.
    pub sessions: Arc<SessionTable>,
}

/// Builds the axum `Router` with all transport routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(SSE_PATH, get(handle_sse).post(handle_rpc))
        .route("/health", get(handle_health))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn handle_health(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "recado",
        "sessions": state.sessions.size(),
    }))
}

/// Opens the long-lived event channel for one caller.
///
/// The handshake naming the request endpoint and a human-readable
/// connection notice are queued before the stream starts, so they are
/// the first two events the caller sees. The drop guard removes the
/// session exactly once, whichever of disconnect, transport error, or
/// shutdown ends the stream.
async fn handle_sse(State(state): State<AppState>) -> impl IntoResponse {
    let (tx, rx) = mpsc::unbounded_channel();
    let _ = tx.send(JsonRpcNotification::endpoint(SSE_PATH));
    let _ = tx.send(JsonRpcNotification::message(
        LogLevel::Info,
        "SSE connection established",
    ));

    let id = state.sessions.open(tx);
    info!(session = %id, open = state.sessions.size(), "sse session opened");

    let stream = SessionStream {
        inner: UnboundedReceiverStream::new(rx),
        _guard: SessionGuard {
            id,
            table: state.sessions.clone(),
        },
    }
    .map(|notification| {
        Ok::<_, Infallible>(match Event::default().json_data(&notification) {
            Ok(event) => event,
            Err(e) => Event::default().comment(format!("unserializable event: {e}")),
        })
    });

    let sse = Sse::new(stream)
        .keep_alive(KeepAlive::new().interval(KEEP_ALIVE_INTERVAL).text("ping"));

    (
        [
            (
                header::CACHE_CONTROL,
                header::HeaderValue::from_static("no-cache, no-transform"),
            ),
            (
                HeaderName::from_static("x-accel-buffering"),
                header::HeaderValue::from_static("no"),
            ),
        ],
        sse,
    )
}

/// Accepts one request envelope and returns one response envelope.
async fn handle_rpc(State(state): State<AppState>, body: String) -> axum::response::Response {
    let json_val: Value = match serde_json::from_str(&body) {
        Ok(v) => v,
        Err(_) => return invalid_request("request is not valid JSON"),
    };

    let has_id = json_val.get("id").is_some_and(|v| !v.is_null());
    if !has_id {
        return invalid_request("request is missing a correlation id");
    }

    let request: JsonRpcRequest = match serde_json::from_value(json_val) {
        Ok(r) => r,
        Err(e) => return invalid_request(&format!("invalid request: {e}")),
    };

    let output = state.handler.dispatch(&request).await;
    match output.to_json() {
        Ok(json_str) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            json_str,
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "jsonrpc": "2.0",
                "id": null,
                "error": { "code": error_codes::INTERNAL_ERROR, "message": e.to_string() }
            })),
        )
            .into_response(),
    }
}

/// Produces the -32600 response used when no correlation id can be
/// recovered (id: null).
fn invalid_request(message: &str) -> axum::response::Response {
    let body = json!({
        "jsonrpc": "2.0",
        "id": null,
        "error": { "code": error_codes::INVALID_REQUEST, "message": message }
    });
    (StatusCode::BAD_REQUEST, Json(body)).into_response()
}

/// Receiver stream tied to a session's lifetime.
struct SessionStream {
    inner: UnboundedReceiverStream<JsonRpcNotification>,
    _guard: SessionGuard,
}

impl Stream for SessionStream {
    type Item = JsonRpcNotification;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Pin::new(&mut self.inner).poll_next(cx)
    }
}

/// Removes the session from the table when the stream is dropped.
struct SessionGuard {
    id: SessionId,
    table: Arc<SessionTable>,
}

impl Drop for SessionGuard {
    fn drop(&mut self) {
        info!(session = %self.id, "sse session torn down");
        self.table.close(&self.id);
    }
}
