//! # recado-dispatch
//!
//! Routes parsed JSON-RPC requests to the tool and resource catalogs
//! and produces exactly one response envelope per request. Both
//! transport bindings share this dispatcher; the only per-transport
//! behavior is the injected progress sink.

mod dispatch;
pub mod handler;

pub use handler::{JsonRpcOutput, RpcHandler};
