//! # recado-transport-stdio
//!
//! Stream-pipe transport binding: newline-delimited JSON request
//! envelopes on stdin, one response envelope per line on stdout.
//! Diagnostics go to the tracing subscriber (stderr), never stdout.

pub mod error;
pub mod framer;
pub mod server;
pub mod transport;

pub use error::TransportError;
pub use framer::LineFramer;
pub use server::PipeServer;
pub use transport::StdioTransport;
