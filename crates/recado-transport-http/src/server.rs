//! HTTP server that binds the transport router to a TCP socket.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use recado_dispatch::RpcHandler;

use crate::error::HttpTransportError;
use crate::router::{build_router, AppState};
use crate::session::SessionTable;

/// Axum-based server for the streamed RPC transport.
pub struct HttpServer {
    pub(crate) addr: SocketAddr,
    pub(crate) state: AppState,
}

impl HttpServer {
    /// Creates a new server.
    ///
    /// # Arguments
    ///
    /// * `handler` — shared RPC dispatcher
    /// * `sessions` — the session table (also the dispatcher's sink)
    /// * `port` — TCP port to listen on
    pub fn new(handler: Arc<RpcHandler>, sessions: Arc<SessionTable>, port: u16) -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], port)),
            state: AppState { handler, sessions },
        }
    }

    /// Starts the server and blocks until it exits.
    ///
    /// # Errors
    ///
    /// Returns an error if the TCP bind fails or the server crashes.
    pub async fn run(self) -> Result<(), HttpTransportError> {
        let listener =
            TcpListener::bind(self.addr)
                .await
                .map_err(|e| HttpTransportError::Bind {
                    addr: self.addr.to_string(),
                    source: e,
                })?;

        tracing::info!(addr = %self.addr, "recado SSE server ready");

        let router = build_router(self.state);
        axum::serve(listener, router)
            .await
            .map_err(|e| HttpTransportError::Serve(e.to_string()))?;

        Ok(())
    }
}
