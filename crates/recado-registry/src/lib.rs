//! # recado-registry
//!
//! The tool catalog and the polymorphic `Tool` abstraction used
//! identically by both transport bindings: a descriptor, a parameter
//! validator, and an executable action. The transports translate their
//! framing into one internal invoke call; nothing transport-specific
//! lives here.

pub mod error;
pub mod progress;
pub mod registry;
pub mod resource;
pub mod send_message;
pub mod tool;

pub use error::ToolError;
pub use progress::{NullSink, ProgressSink};
pub use registry::ToolRegistry;
pub use resource::gateway_resources;
pub use send_message::SendMessageTool;
pub use tool::Tool;
