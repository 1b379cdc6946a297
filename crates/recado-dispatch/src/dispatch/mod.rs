//! Method implementations.
//!
//! One sub-module per RPC method as free functions, keeping
//! `RpcHandler` itself thin (struct + routing only).

pub(crate) mod invoke_tool;
pub(crate) mod list_resources;
pub(crate) mod list_tools;
