//! Server loop over the stream-pipe transport.
//!
//! Each complete non-blank line is parsed independently. A line that
//! does not parse as a request envelope is logged and skipped — there
//! is no response channel for input whose correlation id cannot be
//! recovered — and the stream continues. Each parsed request yields
//! exactly one response line.

use tracing::{debug, error, info, warn};

use recado_dispatch::{JsonRpcOutput, RpcHandler};
use recado_protocol::JsonRpcRequest;

use crate::error::TransportError;
use crate::transport::StdioTransport;

/// RPC server that reads framed lines and dispatches them.
pub struct PipeServer<R, W> {
    transport: StdioTransport<R, W>,
    handler: RpcHandler,
}

impl<R, W> PipeServer<R, W>
where
    R: tokio::io::AsyncRead + Unpin,
    W: tokio::io::AsyncWrite + Unpin,
{
    /// Creates a new server with the given transport and handler.
    pub fn new(transport: StdioTransport<R, W>, handler: RpcHandler) -> Self {
        Self { transport, handler }
    }

    /// Runs the server loop until the input stream is closed.
    pub async fn run(&mut self) -> Result<(), TransportError> {
        info!("recado server starting on stdio");

        loop {
            let lines = match self.transport.read_lines().await? {
                Some(lines) => lines,
                None => {
                    info!("stdin closed, shutting down");
                    return Ok(());
                }
            };

            for line in lines {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                match serde_json::from_str::<JsonRpcRequest>(line) {
                    Ok(request) => {
                        debug!(method = %request.method, id = ?request.id, "received request");
                        let output = self.handler.dispatch(&request).await;
                        self.write_output(&output).await?;
                    }
                    Err(e) => {
                        // No id to correlate a response to; drop the line.
                        warn!(error = %e, "skipping unparseable line");
                    }
                }
            }
        }
    }

    /// Serializes and writes one response envelope.
    async fn write_output(&mut self, output: &JsonRpcOutput) -> Result<(), TransportError> {
        match output.to_json() {
            Ok(json) => self.transport.write_line(&json).await,
            Err(e) => {
                error!(error = %e, "failed to serialize response");
                Err(TransportError::Write(e.to_string()))
            }
        }
    }
}
