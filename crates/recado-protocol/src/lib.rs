//! # recado-protocol
//!
//! JSON-RPC 2.0 envelopes and the recado method vocabulary.
//! This crate defines the wire format shared by the SSE and stdio
//! transport bindings.

pub mod jsonrpc;
pub mod rpc;

pub use jsonrpc::*;
pub use rpc::methods;
