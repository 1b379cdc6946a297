//! Chunked reader/writer over stdin/stdout.
//!
//! Generic over the underlying streams for testability.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tracing::{trace, warn};

use crate::error::TransportError;
use crate::framer::LineFramer;

const READ_CHUNK_BYTES: usize = 8 * 1024;

/// Reads raw bytes from the input stream, frames them into lines, and
/// writes response lines to the output stream.
pub struct StdioTransport<R, W> {
    reader: R,
    writer: W,
    framer: LineFramer,
}

impl<R, W> StdioTransport<R, W>
where
    R: tokio::io::AsyncRead + Unpin,
    W: tokio::io::AsyncWrite + Unpin,
{
    /// Creates a new transport with the given reader and writer.
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            framer: LineFramer::new(),
        }
    }

    /// Reads the next chunk and returns the complete lines it closed.
    ///
    /// Returns `None` on EOF. A chunk that closes no line returns an
    /// empty vector; the partial stays buffered in the framer.
    pub async fn read_lines(&mut self) -> Result<Option<Vec<String>>, TransportError> {
        let mut chunk = [0u8; READ_CHUNK_BYTES];
        let n = self
            .reader
            .read(&mut chunk)
            .await
            .map_err(|e| TransportError::Read(e.to_string()))?;

        if n == 0 {
            if let Some(partial) = self.framer.take_pending() {
                warn!(len = partial.len(), "discarding incomplete trailing line at EOF");
            }
            return Ok(None);
        }

        let push = self.framer.push(&chunk[..n]);
        if push.discarded > 0 {
            warn!(
                bytes = push.discarded,
                max = LineFramer::MAX_LINE_BYTES,
                "dropped oversized line"
            );
        }
        trace!(lines = push.lines.len(), "framed input chunk");
        Ok(Some(push.lines))
    }

    /// Writes one response line to the output stream and flushes.
    pub async fn write_line(&mut self, message: &str) -> Result<(), TransportError> {
        trace!(len = message.len(), "writing response line");

        self.writer
            .write_all(message.as_bytes())
            .await
            .map_err(|e| TransportError::Write(e.to_string()))?;

        self.writer
            .write_all(b"\n")
            .await
            .map_err(|e| TransportError::Write(e.to_string()))?;

        self.writer
            .flush()
            .await
            .map_err(|e| TransportError::Write(e.to_string()))?;

        Ok(())
    }
}
